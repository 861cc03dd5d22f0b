//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with the per-request timeout
//! - GET requests for page content
//! - Classifying failures without ever propagating them
//!
//! Fetching is fail-soft: a timeout, refused connection or non-200 status turns
//! into a [`FetchResult`] variant the walker treats as a dead end. There are no
//! retries.

use crate::config::CrawlerConfig;
use crate::state::PageState;
use reqwest::{Client, StatusCode};
use std::future::Future;
use url::Url;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// HTTP 200 with a readable body
    Success {
        /// Final URL after redirects
        final_url: String,
        /// Page body content
        body: String,
    },

    /// Any status other than 200
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, DNS, body read failure)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// The page state this result maps to
    pub fn state(&self) -> PageState {
        match self {
            Self::Success { .. } => PageState::Processed,
            Self::HttpError { .. } => PageState::HttpError,
            Self::NetworkError { .. } => PageState::Unreachable,
        }
    }
}

/// Source of page content for a frontier walk
///
/// Implementations must be fail-soft: every failure is expressed as a
/// [`FetchResult`] variant rather than an error or a panic.
pub trait PageFetcher: Send + Sync {
    fn fetch(&self, url: &Url) -> impl Future<Output = FetchResult> + Send;
}

/// Fetches pages over HTTP(S) with a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher using [`build_http_client`]
    pub fn new(config: &CrawlerConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> FetchResult {
        fetch_url(&self.client, url.as_str()).await
    }
}

/// Builds an HTTP client with the configured per-request timeout
///
/// Requests carry reqwest's default headers only. Redirects are followed with
/// reqwest's default policy.
///
/// # Example
///
/// ```no_run
/// use sitewalk::config::CrawlerConfig;
/// use sitewalk::crawler::build_http_client;
///
/// let client = build_http_client(&CrawlerConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(config.fetch_timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the outcome
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 200 | `Success` with body |
/// | Any other status | `HttpError` |
/// | Timeout | `NetworkError` |
/// | Connection refused / DNS | `NetworkError` |
/// | Body read failure | `NetworkError` |
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if status != StatusCode::OK {
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success { final_url, body },
                Err(e) => FetchResult::NetworkError {
                    error: format!("Failed to read body: {}", e),
                },
            }
        }
        Err(e) => {
            if e.is_timeout() {
                FetchResult::NetworkError {
                    error: "Request timeout".to_string(),
                }
            } else if e.is_connect() {
                FetchResult::NetworkError {
                    error: "Connection failed".to_string(),
                }
            } else {
                FetchResult::NetworkError {
                    error: e.to_string(),
                }
            }
        }
    }
}
