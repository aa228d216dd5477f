//! Templar - serve markdown templates from heterogeneous sources.
//!
//! Templar resolves a comma-separated specification of template sources
//! (local directories, single files, remote URLs, GitHub repositories)
//! into an immutable registry of named templates. The registry is the
//! contract consumed by a tool-serving hosting layer: one callable tool
//! per template, tool name = template name, tool output = template
//! content.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Source parsing, loading, and the resolved registry
//!
//! # Example
//!
//! ```
//! use templar::registry::{parse_sources, SourceKind};
//!
//! let sources = parse_sources("https://example.com/bug.md,, docs/bug.md ,");
//! assert_eq!(sources.len(), 2);
//! assert_eq!(sources[0].kind, SourceKind::RemoteUrl);
//! ```
//!
//! For full resolution against live sources, see [`registry::Registry::resolve`].

pub mod cli;
pub mod error;
pub mod registry;

pub use error::{LoadError, Result, TemplarError};
