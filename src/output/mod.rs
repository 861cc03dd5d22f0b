//! Output module for crawl results
//!
//! This module handles:
//! - Writing the merged URL set as a newline-delimited list
//! - Summarizing a crawl for the terminal

mod stats;
mod url_list;

pub use stats::{print_summary, CrawlSummary, SeedSummary};
pub use url_list::write_url_list;
