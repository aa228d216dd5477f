//! Error types for templar operations.
//!
//! This module defines [`TemplarError`], the primary error type, the
//! recorded-not-raised [`LoadError`] value, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Per-source and per-file failures during resolution are captured as
//!   [`LoadError`] data and surfaced through `Registry::errors()`
//! - Only total failure (no template loaded from any source) propagates
//!   as [`TemplarError::ResolutionFailed`]
//! - Use `anyhow::Error` (via `TemplarError::Other`) for unexpected errors

use std::fmt;
use thiserror::Error;

/// Core error type for templar operations.
#[derive(Debug, Error)]
pub enum TemplarError {
    /// Every configured source failed and no template was loaded.
    #[error("No templates could be loaded from any source ({} error(s))", .errors.len())]
    ResolutionFailed { errors: Vec<LoadError> },

    /// Requested template does not exist in the registry.
    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for templar operations.
pub type Result<T> = std::result::Result<T, TemplarError>;

/// A failure to load one source, or one file within a source.
///
/// Load errors are recorded during resolution rather than raised; a bad
/// source never aborts loading of the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    /// The source descriptor the failure belongs to, in its raw form.
    pub source: String,

    /// The specific item within the source (file path or URL), when the
    /// source yields more than one item.
    pub item: Option<String>,

    /// Human-readable failure reason.
    pub message: String,
}

impl LoadError {
    /// Record a failure for a whole source.
    pub fn new(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            item: None,
            message: message.into(),
        }
    }

    /// Record a failure for one item within a source.
    pub fn with_item(
        source: impl Into<String>,
        item: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            item: Some(item.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.item {
            Some(item) => write!(f, "{} ({}): {}", self.source, item, self.message),
            None => write!(f, "{}: {}", self.source, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_failed_displays_error_count() {
        let err = TemplarError::ResolutionFailed {
            errors: vec![
                LoadError::new("/missing", "not found"),
                LoadError::new("https://example.com/t.md", "HTTP 404"),
            ],
        };
        assert!(err.to_string().contains("2 error(s)"));
    }

    #[test]
    fn unknown_template_displays_name() {
        let err = TemplarError::UnknownTemplate {
            name: "bug_report".into(),
        };
        assert!(err.to_string().contains("bug_report"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TemplarError = io_err.into();
        assert!(matches!(err, TemplarError::Io(_)));
    }

    #[test]
    fn load_error_displays_source_and_message() {
        let err = LoadError::new("/tmp/templates", "permission denied");
        let msg = err.to_string();
        assert!(msg.contains("/tmp/templates"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn load_error_displays_item_when_present() {
        let err = LoadError::with_item("/tmp/templates", "/tmp/templates/bad.md", "not UTF-8");
        let msg = err.to_string();
        assert!(msg.contains("/tmp/templates/bad.md"));
        assert!(msg.contains("not UTF-8"));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(TemplarError::UnknownTemplate { name: "x".into() })
        }
        assert!(returns_error().is_err());
    }
}
