//! Source specification parsing.
//!
//! The template source specification is a single comma-separated string,
//! e.g. `".github/ISSUE_TEMPLATE,https://example.com/bug.md,octo/tools"`.
//! Parsing splits it into ordered [`SourceDescriptor`] values and classifies
//! each segment once, so the rest of the pipeline dispatches on
//! [`SourceKind`] instead of re-inspecting string shapes.
//!
//! Classification performs no retrieval; the only I/O is a local `stat` to
//! distinguish directories from files. A nonexistent path is still accepted
//! here and reported by the loader.

use regex::Regex;
use std::fmt;
use std::path::Path;

/// Where a source segment points, decided once at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// An existing local directory; every markdown file in it is a template.
    LocalDirectory,
    /// A single local file (existence checked at load time).
    LocalFile,
    /// An `http://` or `https://` URL yielding one template.
    RemoteUrl,
    /// A GitHub repository in `owner/repo` shorthand.
    ///
    /// Without `path`, templates are listed from the repository's
    /// `.github/ISSUE_TEMPLATE/` directory; with `path`
    /// (`owner/repo:path/to/file.md`), exactly that file is fetched.
    GitHubRepo {
        owner: String,
        repo: String,
        path: Option<String>,
    },
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::LocalDirectory => write!(f, "local directory"),
            SourceKind::LocalFile => write!(f, "local file"),
            SourceKind::RemoteUrl => write!(f, "remote URL"),
            SourceKind::GitHubRepo { path: None, .. } => write!(f, "GitHub repository"),
            SourceKind::GitHubRepo { path: Some(_), .. } => write!(f, "GitHub repository file"),
        }
    }
}

/// One classified entry from the source specification string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    /// The original segment, trimmed of surrounding whitespace. Never empty.
    pub raw: String,
    /// The classified kind, used for loader dispatch.
    pub kind: SourceKind,
}

impl SourceDescriptor {
    /// Classify a single trimmed, non-empty segment.
    pub fn classify(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            kind: classify_kind(raw),
        }
    }
}

/// Parse a comma-separated source specification into ordered descriptors.
///
/// Segments are trimmed; empty segments (from consecutive, leading, or
/// trailing commas) are dropped silently.
///
/// # Example
///
/// ```
/// use templar::registry::{parse_sources, SourceKind};
///
/// let sources = parse_sources(" https://example.com/bug.md ,, /tmp/notes.md ,");
/// assert_eq!(sources.len(), 2);
/// assert_eq!(sources[0].kind, SourceKind::RemoteUrl);
/// assert_eq!(sources[1].raw, "/tmp/notes.md");
/// ```
pub fn parse_sources(raw: &str) -> Vec<SourceDescriptor> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(SourceDescriptor::classify)
        .collect()
}

fn classify_kind(raw: &str) -> SourceKind {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return SourceKind::RemoteUrl;
    }

    // Local existence wins over the owner/repo shorthand, so a relative
    // path like `.github/ISSUE_TEMPLATE` that exists on disk stays local.
    let path = Path::new(raw);
    if path.is_dir() {
        return SourceKind::LocalDirectory;
    }
    if path.is_file() {
        return SourceKind::LocalFile;
    }

    if let Some((repo_part, file_path)) = raw.split_once(':') {
        if let Some((owner, repo)) = split_repo_shorthand(repo_part) {
            return SourceKind::GitHubRepo {
                owner,
                repo,
                path: Some(file_path.to_string()),
            };
        }
    }
    if let Some((owner, repo)) = split_repo_shorthand(raw) {
        return SourceKind::GitHubRepo {
            owner,
            repo,
            path: None,
        };
    }

    // Anything else is treated as a file path; the loader reports it if
    // it does not exist.
    SourceKind::LocalFile
}

/// Split an `owner/repo` shorthand, or `None` if the string has a
/// different shape.
fn split_repo_shorthand(s: &str) -> Option<(String, String)> {
    let shorthand = Regex::new(r"^[\w.-]+/[\w.-]+$").expect("valid shorthand pattern");
    if !shorthand.is_match(s) {
        return None;
    }
    let (owner, repo) = s.split_once('/')?;
    Some((owner.to_string(), repo.to_string()))
}
