//! GitHub repository template sources.
//!
//! An `owner/repo` source loads every markdown issue template from the
//! repository's `.github/ISSUE_TEMPLATE/` directory: the directory is
//! listed through the GitHub contents API, then each file is fetched from
//! the raw content host. An `owner/repo:path` source fetches exactly one
//! file from the raw host.
//!
//! A repository without an issue-template directory answers 404 on the
//! listing; that is an empty source, not a failure. Individual file
//! fetches that fail are recorded per file while the rest continue.

use serde::Deserialize;

use crate::error::LoadError;
use crate::registry::fetch::HttpFetcher;
use crate::registry::load::LoadResult;
use crate::registry::source::SourceDescriptor;
use crate::registry::template::Template;

/// Default GitHub contents API host.
pub const GITHUB_API_BASE: &str = "https://api.github.com";
/// Default raw content host.
pub const GITHUB_RAW_BASE: &str = "https://raw.githubusercontent.com";

const DEFAULT_BRANCH: &str = "main";
const TEMPLATE_DIR: &str = ".github/ISSUE_TEMPLATE";

/// One entry from the contents API listing.
#[derive(Debug, Deserialize)]
struct ContentsEntry {
    name: String,
    path: String,
    #[serde(rename = "type")]
    entry_type: String,
}

/// Load every markdown issue template from a repository.
///
/// `api_base` and `raw_base` default to the github.com hosts; tests point
/// them at a mock server.
pub fn load_issue_templates(
    origin: &SourceDescriptor,
    owner: &str,
    repo: &str,
    fetcher: &HttpFetcher,
    api_base: &str,
    raw_base: &str,
) -> LoadResult {
    let listing_url = format!(
        "{}/repos/{}/{}/contents/{}?ref={}",
        api_base, owner, repo, TEMPLATE_DIR, DEFAULT_BRANCH
    );

    let body = match fetcher.fetch_optional(&listing_url) {
        // No ISSUE_TEMPLATE directory in this repository.
        Ok(None) => return LoadResult::default(),
        Ok(Some(body)) => body,
        Err(err) => {
            return LoadResult::failure(LoadError::new(&origin.raw, format!("{:#}", err)))
        }
    };

    let entries: Vec<ContentsEntry> = match serde_json::from_str(&body) {
        Ok(entries) => entries,
        Err(err) => {
            return LoadResult::failure(LoadError::new(
                &origin.raw,
                format!("Unexpected contents API response: {}", err),
            ))
        }
    };

    let mut result = LoadResult::default();
    for entry in entries {
        if entry.entry_type != "file" || !entry.name.ends_with(".md") {
            continue;
        }
        let url = raw_url(raw_base, owner, repo, &entry.path);
        match fetcher.fetch(&url) {
            Ok(content) => result.templates.push(Template {
                name: file_stem(&entry.name),
                content,
                origin: origin.raw.clone(),
            }),
            Err(err) => result
                .errors
                .push(LoadError::with_item(&origin.raw, url, format!("{:#}", err))),
        }
    }
    result
}

/// Load a single file from a repository (`owner/repo:path` form).
pub fn load_repo_file(
    origin: &SourceDescriptor,
    owner: &str,
    repo: &str,
    path: &str,
    fetcher: &HttpFetcher,
    raw_base: &str,
) -> LoadResult {
    let url = raw_url(raw_base, owner, repo, path);
    match fetcher.fetch(&url) {
        Ok(content) => LoadResult::single(Template {
            name: file_stem(path.rsplit('/').next().unwrap_or(path)),
            content,
            origin: origin.raw.clone(),
        }),
        Err(err) => LoadResult::failure(LoadError::new(&origin.raw, format!("{:#}", err))),
    }
}

fn raw_url(raw_base: &str, owner: &str, repo: &str, path: &str) -> String {
    format!("{}/{}/{}/{}/{}", raw_base, owner, repo, DEFAULT_BRANCH, path)
}

fn file_stem(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    }
}
