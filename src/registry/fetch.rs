//! HTTP template fetching.
//!
//! Provides a blocking HTTP client with a bounded per-request timeout.
//! Bodies are decoded as strict UTF-8: a body that fails to decode is an
//! error, never partially returned content.

use anyhow::{anyhow, bail, Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// Fetches template content over HTTP/HTTPS.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with the default 30-second timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new HTTP fetcher with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent("templar")
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            timeout,
        }
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch a URL, returning the body as UTF-8 text.
    ///
    /// A non-2xx status, a network failure, a timeout, or a body that is
    /// not valid UTF-8 is an error.
    pub fn fetch(&self, url: &str) -> Result<String> {
        match self.fetch_inner(url)? {
            Some(content) => Ok(content),
            None => bail!("HTTP 404 Not Found fetching {}", url),
        }
    }

    /// Fetch a URL, treating 404 as an empty result.
    ///
    /// Returns `None` when the server answers 404 Not Found. Used for
    /// listings where a missing resource means "nothing there" rather
    /// than a failure.
    pub fn fetch_optional(&self, url: &str) -> Result<Option<String>> {
        self.fetch_inner(url)
    }

    fn fetch_inner(&self, url: &str) -> Result<Option<String>> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            bail!("HTTP {} fetching {}", status, url);
        }

        let bytes = response
            .bytes()
            .with_context(|| format!("Failed to read response from {}", url))?;
        let content = String::from_utf8(bytes.to_vec())
            .map_err(|_| anyhow!("Response from {} is not valid UTF-8", url))?;

        Ok(Some(content))
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}
