//! Sources command implementation.
//!
//! The `templar sources` command shows how the source specification is
//! parsed and classified, without performing any loading.

use crate::cli::theme::TemplarTheme;
use crate::error::Result;
use crate::registry::parse_sources;

use super::dispatcher::{Command, CommandResult};

/// The sources command implementation.
pub struct SourcesCommand {
    sources: String,
}

impl SourcesCommand {
    /// Create a new sources command.
    pub fn new(sources: &str) -> Self {
        Self {
            sources: sources.to_string(),
        }
    }
}

impl Command for SourcesCommand {
    fn execute(&self) -> Result<CommandResult> {
        let theme = TemplarTheme::new();
        let descriptors = parse_sources(&self.sources);

        if descriptors.is_empty() {
            println!("{}", theme.warning.apply_to("No sources configured"));
            return Ok(CommandResult::success());
        }

        println!("{}", theme.header.apply_to("Sources:"));
        for descriptor in &descriptors {
            println!(
                "  {} {}",
                theme.highlight.apply_to(&descriptor.raw),
                theme.dim.apply_to(format!("({})", descriptor.kind))
            );
        }

        Ok(CommandResult::success())
    }
}
