//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::time::Duration;

use crate::cli::args::{Cli, Commands, ListArgs};
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    sources: String,
    timeout: Duration,
    quiet: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher from the resolved global options.
    pub fn new(sources: String, timeout: Duration, quiet: bool) -> Self {
        Self {
            sources,
            timeout,
            quiet,
        }
    }

    /// Get the source specification string.
    pub fn sources(&self) -> &str {
        &self.sources
    }

    /// Dispatch and execute a command.
    ///
    /// With no subcommand, `list` runs with default arguments.
    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(
                    &self.sources,
                    self.timeout,
                    self.quiet,
                    args.clone(),
                );
                cmd.execute()
            }
            None => {
                let cmd = super::list::ListCommand::new(
                    &self.sources,
                    self.timeout,
                    self.quiet,
                    ListArgs::default(),
                );
                cmd.execute()
            }
            Some(Commands::Show(args)) => {
                let cmd =
                    super::show::ShowCommand::new(&self.sources, self.timeout, args.clone());
                cmd.execute()
            }
            Some(Commands::Sources) => {
                let cmd = super::sources::SourcesCommand::new(&self.sources);
                cmd.execute()
            }
            Some(Commands::Check) => {
                let cmd = super::check::CheckCommand::new(&self.sources, self.timeout);
                cmd.execute()
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_result_has_zero_exit_code() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn failure_result_carries_exit_code() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatcher_exposes_sources() {
        let dispatcher =
            CommandDispatcher::new("/tmp/t".to_string(), Duration::from_secs(30), false);
        assert_eq!(dispatcher.sources(), "/tmp/t");
    }
}
