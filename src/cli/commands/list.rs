//! List command implementation.
//!
//! The `templar list` command resolves the configured sources and prints
//! the available template names.

use std::time::Duration;

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::cli::theme::TemplarTheme;
use crate::error::{Result, TemplarError};
use crate::registry::{HttpFetcher, Registry};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    sources: String,
    timeout: Duration,
    quiet: bool,
    args: ListArgs,
}

#[derive(Serialize)]
struct ListEntry<'a> {
    name: &'a str,
    origin: &'a str,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(sources: &str, timeout: Duration, quiet: bool, args: ListArgs) -> Self {
        Self {
            sources: sources.to_string(),
            timeout,
            quiet,
            args,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self) -> Result<CommandResult> {
        let theme = TemplarTheme::new();
        let fetcher = HttpFetcher::with_timeout(self.timeout);

        let registry = match Registry::resolve(&self.sources, &fetcher) {
            Ok(registry) => registry,
            Err(TemplarError::ResolutionFailed { errors }) => {
                eprintln!(
                    "{}",
                    theme
                        .error
                        .apply_to("No templates could be loaded from any source")
                );
                for error in &errors {
                    eprintln!("  {}", theme.dim.apply_to(error.to_string()));
                }
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if self.args.json {
            let entries: Vec<ListEntry> = registry
                .templates()
                .map(|t| ListEntry {
                    name: &t.name,
                    origin: &t.origin,
                })
                .collect();
            let json = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        if registry.is_empty() {
            println!(
                "{}",
                theme.warning.apply_to("No templates found in configured sources")
            );
            return Ok(CommandResult::success());
        }

        println!("{}", theme.header.apply_to("Templates:"));
        for template in registry.templates() {
            if self.args.origins {
                println!(
                    "  {} {}",
                    theme.highlight.apply_to(&template.name),
                    theme.dim.apply_to(format!("({})", template.origin))
                );
            } else {
                println!("  {}", theme.highlight.apply_to(&template.name));
            }
        }

        if !self.quiet {
            for error in registry.errors() {
                eprintln!(
                    "{} {}",
                    theme.warning.apply_to("warning:"),
                    theme.dim.apply_to(error.to_string())
                );
            }
        }

        Ok(CommandResult::success())
    }
}
