//! Crawl summary for the terminal
//!
//! Builds per-seed and overall counts from a [`CrawlReport`] and prints them
//! once the crawl is finished.

use crate::crawler::CrawlReport;
use crate::state::PageState;

/// Per-seed line of the summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub seed: String,
    pub urls: usize,
    pub failures: usize,
    pub truncated: bool,
}

/// Overall crawl summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Seeds a walk was started for
    pub seed_count: usize,

    /// Distinct URLs across all seeds
    pub total_urls: usize,

    /// Pages whose fetch produced content
    pub pages_processed: usize,

    /// Pages that answered with a status other than 200
    pub pages_http_error: usize,

    /// Pages that could not be reached
    pub pages_unreachable: usize,

    /// Seeds stopped by a page or time limit
    pub truncated_seeds: usize,

    /// Walks that ended without a result
    pub failed_walks: usize,

    /// One entry per finished seed, sorted by seed URL
    pub seeds: Vec<SeedSummary>,
}

impl CrawlSummary {
    pub fn from_report(report: &CrawlReport) -> Self {
        let count = |state: PageState| -> usize {
            report
                .results
                .iter()
                .filter_map(|r| r.pages_by_state.get(&state))
                .sum()
        };

        let mut seeds: Vec<SeedSummary> = report
            .results
            .iter()
            .map(|r| SeedSummary {
                seed: r.seed.to_string(),
                urls: r.visited.len(),
                failures: r.failures(),
                truncated: r.is_truncated(),
            })
            .collect();
        seeds.sort_by(|a, b| a.seed.cmp(&b.seed));

        Self {
            seed_count: report.seed_count,
            total_urls: report.total_urls(),
            pages_processed: count(PageState::Processed),
            pages_http_error: count(PageState::HttpError),
            pages_unreachable: count(PageState::Unreachable),
            truncated_seeds: seeds.iter().filter(|s| s.truncated).count(),
            failed_walks: report.failed_walks,
            seeds,
        }
    }

    /// The one-line result reported at the end of every run
    pub fn headline(&self) -> String {
        format!(
            "Crawled URLs from {} seeds. Total URLs found: {}.",
            self.seed_count, self.total_urls
        )
    }
}

/// Prints the summary to stdout
pub fn print_summary(summary: &CrawlSummary, verbose: bool) {
    println!("=== Crawl Summary ===\n");

    println!("Pages:");
    println!("  Processed: {}", summary.pages_processed);
    println!("  HTTP errors: {}", summary.pages_http_error);
    println!("  Unreachable: {}", summary.pages_unreachable);
    println!();

    if summary.truncated_seeds > 0 {
        println!("Truncated seeds: {}", summary.truncated_seeds);
    }
    if summary.failed_walks > 0 {
        println!("Failed walks: {}", summary.failed_walks);
    }

    if verbose {
        println!("Seeds ({}):", summary.seeds.len());
        for seed in &summary.seeds {
            let marker = if seed.truncated { " (truncated)" } else { "" };
            println!(
                "  - {}: {} URLs, {} failed{}",
                seed.seed, seed.urls, seed.failures, marker
            );
        }
        println!();
    }

    println!("{}", summary.headline());
}
