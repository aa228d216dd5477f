//! Completions command implementation.
//!
//! The `templar completions <shell>` command writes a completion script
//! for the requested shell to stdout.

use clap::CommandFactory;
use clap_complete::generate;
use std::io;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self) -> Result<CommandResult> {
        let mut cmd = Cli::command();
        generate(self.args.shell, &mut cmd, "templar", &mut io::stdout());
        Ok(CommandResult::success())
    }
}
