//! Remote template loading from HTTP/HTTPS URLs.
//!
//! A URL source yields exactly one template on success. The template name
//! is derived from the final path segment of the URL with any query string
//! and file extension stripped, so
//! `https://example.com/templates/bug_report.md?raw=1` becomes `bug_report`.

use crate::error::LoadError;
use crate::registry::fetch::HttpFetcher;
use crate::registry::load::LoadResult;
use crate::registry::source::SourceDescriptor;
use crate::registry::template::Template;

/// Fallback name when a URL has no usable path segment.
const FALLBACK_NAME: &str = "template";

/// Fetch one template from a URL source.
pub fn load_url(origin: &SourceDescriptor, fetcher: &HttpFetcher) -> LoadResult {
    match fetcher.fetch(&origin.raw) {
        Ok(content) => LoadResult::single(Template {
            name: name_from_url(&origin.raw),
            content,
            origin: origin.raw.clone(),
        }),
        Err(err) => LoadResult::failure(LoadError::new(&origin.raw, format!("{:#}", err))),
    }
}

/// Derive a template name from the final path segment of a URL.
pub fn name_from_url(url: &str) -> String {
    let without_query = url.split(&['?', '#'][..]).next().unwrap_or(url);
    let after_scheme = without_query
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(without_query);
    let path = after_scheme
        .split_once('/')
        .map(|(_, path)| path)
        .unwrap_or("");
    let segment = path.trim_end_matches('/').rsplit('/').next().unwrap_or("");

    let stem = match segment.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => segment,
    };

    if stem.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        stem.to_string()
    }
}
