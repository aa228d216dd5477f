//! Template source resolution and registry.
//!
//! This module turns a comma-separated source specification into an
//! immutable, name-keyed collection of templates:
//!
//! 1. [`source`] parses the specification into classified descriptors
//! 2. [`local`], [`remote`], and [`github`] load each descriptor,
//!    capturing every failure as data instead of aborting
//! 3. [`resolver`] aggregates the results in source order (later sources
//!    override earlier ones on name conflicts) into a [`Registry`]
//!
//! # Example
//!
//! ```no_run
//! use templar::registry::{HttpFetcher, Registry};
//!
//! let fetcher = HttpFetcher::new();
//! let registry = Registry::resolve("/etc/templates,https://example.com/bug.md", &fetcher)?;
//!
//! if let Some(template) = registry.get("bug") {
//!     println!("{}", template.content);
//! }
//! # Ok::<(), templar::TemplarError>(())
//! ```

pub mod fetch;
pub mod github;
pub mod load;
pub mod local;
pub mod remote;
pub mod resolver;
pub mod source;
pub mod template;

// Re-exports
pub use fetch::HttpFetcher;
pub use load::LoadResult;
pub use resolver::{aggregate, Registry};
pub use source::{parse_sources, SourceDescriptor, SourceKind};
pub use template::Template;
