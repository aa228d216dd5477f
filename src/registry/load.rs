//! Per-source load results and loader dispatch.
//!
//! Loading never throws past this boundary: every failure mode is
//! captured as [`LoadError`] data inside the [`LoadResult`], so one bad
//! source cannot abort resolution of the others.

use std::path::Path;

use crate::error::LoadError;
use crate::registry::fetch::HttpFetcher;
use crate::registry::source::{SourceDescriptor, SourceKind};
use crate::registry::template::Template;
use crate::registry::{github, local, remote};

/// The outcome of loading one source descriptor.
///
/// A source that partially fails (a directory where one file is
/// unreadable) carries both the templates that succeeded and one error
/// per failed item.
#[derive(Debug, Default)]
pub struct LoadResult {
    /// Templates retrieved from the source, in listing order.
    pub templates: Vec<Template>,
    /// Failures recorded while loading, in occurrence order.
    pub errors: Vec<LoadError>,
}

impl LoadResult {
    /// A result carrying exactly one template.
    pub fn single(template: Template) -> Self {
        Self {
            templates: vec![template],
            errors: Vec::new(),
        }
    }

    /// A result carrying exactly one error and no templates.
    pub fn failure(error: LoadError) -> Self {
        Self {
            templates: Vec::new(),
            errors: vec![error],
        }
    }

    /// Whether the source produced nothing but errors.
    pub fn is_failure(&self) -> bool {
        self.templates.is_empty() && !self.errors.is_empty()
    }
}

impl SourceDescriptor {
    /// Retrieve this source's templates, dispatching on the classified kind.
    pub fn load(&self, fetcher: &HttpFetcher) -> LoadResult {
        match &self.kind {
            SourceKind::LocalDirectory => local::load_directory(self, Path::new(&self.raw)),
            SourceKind::LocalFile => local::load_file(self, Path::new(&self.raw)),
            SourceKind::RemoteUrl => remote::load_url(self, fetcher),
            SourceKind::GitHubRepo { owner, repo, path } => match path {
                Some(path) => github::load_repo_file(
                    self,
                    owner,
                    repo,
                    path,
                    fetcher,
                    github::GITHUB_RAW_BASE,
                ),
                None => github::load_issue_templates(
                    self,
                    owner,
                    repo,
                    fetcher,
                    github::GITHUB_API_BASE,
                    github::GITHUB_RAW_BASE,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_result_is_not_failure() {
        let result = LoadResult::default();
        assert!(!result.is_failure());
    }

    #[test]
    fn error_only_result_is_failure() {
        let result = LoadResult::failure(LoadError::new("/x", "nope"));
        assert!(result.is_failure());
    }

    #[test]
    fn partial_result_is_not_failure() {
        let mut result = LoadResult::single(Template {
            name: "a".into(),
            content: "A".into(),
            origin: "/dir".into(),
        });
        result.errors.push(LoadError::new("/dir", "one bad file"));
        assert!(!result.is_failure());
    }

    #[test]
    fn dispatch_loads_directory_descriptor() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bug.md"), "# Bug").unwrap();

        let descriptor = SourceDescriptor::classify(temp.path().to_str().unwrap());
        assert_eq!(descriptor.kind, SourceKind::LocalDirectory);

        let result = descriptor.load(&HttpFetcher::new());
        assert_eq!(result.templates.len(), 1);
    }

    #[test]
    fn dispatch_loads_file_descriptor() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("note.md");
        fs::write(&file, "note").unwrap();

        let descriptor = SourceDescriptor::classify(file.to_str().unwrap());
        let result = descriptor.load(&HttpFetcher::new());
        assert_eq!(result.templates.len(), 1);
        assert_eq!(result.templates[0].name, "note");
    }
}
