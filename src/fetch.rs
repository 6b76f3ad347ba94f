//! Single-URL icon fetcher.
//!
//! One GET per call, no retries. The body is buffered in memory and only
//! written to disk once the response checks out, so a failed fetch never
//! leaves a partial or truncated file behind.

use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

/// User-Agent sent with every request. Some icon CDNs refuse requests with
/// no browser-like agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a single fetch attempt failed. Every variant is handled the same way
/// by the caller (move on to the next candidate URL); the distinction only
/// shows up in logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {0}")]
    Status(reqwest::StatusCode),

    #[error("not an image (content-type: {content_type})")]
    NotAnImage { content_type: String },

    #[error("failed to write file: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP client configured for icon scraping.
#[derive(Debug, Clone)]
pub struct IconFetcher {
    client: Client,
}

impl IconFetcher {
    /// Build a fetcher with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// Download `url` to `dest`, overwriting any existing file.
    ///
    /// Fails if the response status is not 2xx or if the declared
    /// `Content-Type` does not start with `image/` (catches HTML error pages
    /// served with 200 OK). Returns the number of bytes written.
    pub async fn fetch(&self, url: &str, dest: &Path) -> Result<u64, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.starts_with("image/") {
            return Err(FetchError::NotAnImage { content_type });
        }

        let bytes = response.bytes().await.map_err(classify_transport_error)?;
        std::fs::write(dest, &bytes)?;
        Ok(bytes.len() as u64)
    }
}

/// Timeouts get their own variant so logs can tell a slow source from a
/// broken one.
fn classify_transport_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Http(err)
    }
}
