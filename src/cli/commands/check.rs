//! Check command implementation.
//!
//! The `templar check` command resolves every configured source and
//! reports per-source statistics and every recorded load error. Partial
//! failures exit 0 (resolution succeeded with warnings); total failure
//! exits 1, matching the hosting layer's startup behavior.

use std::time::Duration;

use crate::cli::theme::TemplarTheme;
use crate::error::{Result, TemplarError};
use crate::registry::{aggregate, parse_sources, HttpFetcher};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    sources: String,
    timeout: Duration,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(sources: &str, timeout: Duration) -> Self {
        Self {
            sources: sources.to_string(),
            timeout,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self) -> Result<CommandResult> {
        let theme = TemplarTheme::new();
        let fetcher = HttpFetcher::with_timeout(self.timeout);
        let descriptors = parse_sources(&self.sources);

        if descriptors.is_empty() {
            println!("{}", theme.warning.apply_to("No sources configured"));
            return Ok(CommandResult::success());
        }

        let mut results = Vec::with_capacity(descriptors.len());
        for descriptor in &descriptors {
            let result = descriptor.load(&fetcher);

            let status = if result.is_failure() {
                theme.error.apply_to("failed".to_string())
            } else {
                theme.success.apply_to(format!(
                    "{} template(s)",
                    result.templates.len()
                ))
            };
            println!(
                "  {} {} {}",
                theme.highlight.apply_to(&descriptor.raw),
                theme.dim.apply_to(format!("({})", descriptor.kind)),
                status
            );
            for error in &result.errors {
                println!("    {}", theme.warning.apply_to(error.to_string()));
            }

            results.push(result);
        }

        match aggregate(results) {
            Ok(registry) => {
                println!(
                    "{}",
                    theme.success.apply_to(format!(
                        "Resolved {} template(s), {} warning(s)",
                        registry.len(),
                        registry.errors().len()
                    ))
                );
                Ok(CommandResult::success())
            }
            Err(TemplarError::ResolutionFailed { errors }) => {
                println!(
                    "{}",
                    theme.error.apply_to(format!(
                        "Resolution failed: no templates loaded, {} error(s)",
                        errors.len()
                    ))
                );
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
