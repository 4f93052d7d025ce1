//! Outbound HTTP fetching.
//!
//! A `PageFetcher` wraps a shared `reqwest::Client` and performs plain GET
//! requests, returning the decoded body together with the status code.
//! No status branching happens here — a 404 page still has paragraphs,
//! and callers decide what a non-2xx response means.

use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error fetching a page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The client itself could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    /// The request never produced a response (bad URL, DNS, refused, timeout).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// A response arrived but its body could not be read or decoded.
    #[error("failed to read body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// The result of fetching one URL.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// The URL that was requested.
    pub url: String,
    /// HTTP status code of the response.
    pub status: u16,
    /// Decoded response body.
    pub body: String,
}

/// HTTP client for fetching pages.
///
/// Cloning is cheap; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Create a fetcher with the default request timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a fetcher with a specific request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Build)?;
        Ok(Self { client })
    }

    /// GET a URL and return the decoded body.
    ///
    /// The URL is passed to the transport unvalidated; an unparseable URL
    /// surfaces as a `Request` error. Non-2xx responses are returned as
    /// successes with their body intact.
    pub async fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        debug!("fetching {url}");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

        debug!("fetched {url}: status {status}, {} bytes", body.len());

        Ok(FetchResponse {
            url: url.to_string(),
            status,
            body,
        })
    }
}
