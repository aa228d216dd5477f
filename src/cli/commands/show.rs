//! Show command implementation.
//!
//! The `templar show <name>` command resolves the configured sources and
//! prints one template's content verbatim.

use std::time::Duration;

use crate::cli::args::ShowArgs;
use crate::cli::theme::TemplarTheme;
use crate::error::{Result, TemplarError};
use crate::registry::{HttpFetcher, Registry};

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    sources: String,
    timeout: Duration,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(sources: &str, timeout: Duration, args: ShowArgs) -> Self {
        Self {
            sources: sources.to_string(),
            timeout,
            args,
        }
    }
}

impl Command for ShowCommand {
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

        match registry.get(&self.args.name) {
            Some(template) => {
                // Content is the payload; print it unstyled.
                print!("{}", template.content);
                if !template.content.ends_with('\n') {
                    println!();
                }
                Ok(CommandResult::success())
            }
            None => {
                eprintln!(
                    "{} {}",
                    theme.error.apply_to("Unknown template:"),
                    theme.highlight.apply_to(&self.args.name)
                );
                let names = registry.names();
                if !names.is_empty() {
                    eprintln!(
                        "{} {}",
                        theme.dim.apply_to("Available:"),
                        theme.dim.apply_to(names.join(", "))
                    );
                }
                Ok(CommandResult::failure(1))
            }
        }
    }
}
