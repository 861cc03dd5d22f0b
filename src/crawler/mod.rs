//! Crawler module for site discovery
//!
//! This module contains the core crawling logic:
//! - HTTP fetching with a fixed per-request timeout
//! - Anchor link extraction from HTML
//! - The per-seed frontier walk
//! - Concurrent coordination across seeds

mod coordinator;
mod fetcher;
mod parser;
mod walker;

pub use coordinator::{run_crawl, Coordinator, CrawlReport};
pub use fetcher::{build_http_client, fetch_url, FetchResult, HttpFetcher, PageFetcher};
pub use parser::extract_hrefs;
pub use walker::{CrawlResult, FrontierWalker, TruncationReason, WalkLimits, WalkOutcome};

use crate::config::Config;
use crate::CrawlError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Load the seed manifest
/// 2. Build the HTTP client
/// 3. Walk every seed's site concurrently
/// 4. Write the merged URL list
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed; individual fetch failures are counted
/// * `Err(CrawlError)` - The manifest, HTTP client or output file failed
pub async fn crawl(config: &Config) -> Result<CrawlReport, CrawlError> {
    run_crawl(config).await
}
