//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Templar - serve markdown templates from local and remote sources.
#[derive(Debug, Parser)]
#[command(name = "templar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Comma-separated template sources: directories, files, URLs, or
    /// GitHub owner/repo shorthands
    #[arg(
        short,
        long,
        global = true,
        env = "TEMPLAR_SOURCES",
        default_value = ".github/ISSUE_TEMPLATE"
    )]
    pub sources: String,

    /// HTTP fetch timeout in seconds
    #[arg(long, global = true, env = "TEMPLAR_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List resolved templates (default if no command specified)
    List(ListArgs),

    /// Print one template's content
    Show(ShowArgs),

    /// Show how the source specification is parsed, without loading
    Sources,

    /// Resolve all sources and report load statistics and errors
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Show the originating source for each template
    #[arg(long)]
    pub origins: bool,

    /// Emit the template list as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Template name (file stem, as shown by `templar list`)
    pub name: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}
