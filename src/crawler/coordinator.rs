//! Crawler coordinator - runs one frontier walk per seed
//!
//! This module contains the top-level crawl orchestration:
//! - Loading seeds from the manifest
//! - Spawning one walker task per seed
//! - Merging per-seed results into one URL set
//! - Writing the URL list

use crate::config::Config;
use crate::crawler::fetcher::{HttpFetcher, PageFetcher};
use crate::crawler::walker::{CrawlResult, FrontierWalker, WalkLimits};
use crate::manifest::load_seeds;
use crate::output::write_url_list;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinSet;
use url::Url;

/// Merged results of a crawl over all seeds
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    /// Number of seeds a walk was started for
    pub seed_count: usize,

    /// Per-seed results, in completion order
    pub results: Vec<CrawlResult>,

    /// Union of every seed's visited set
    pub urls: HashSet<Url>,

    /// Seeds whose walk task failed before returning a result
    pub failed_walks: usize,
}

impl CrawlReport {
    pub fn total_urls(&self) -> usize {
        self.urls.len()
    }

    /// Merged URLs in lexicographic order
    pub fn sorted_urls(&self) -> Vec<String> {
        let mut urls: Vec<String> = self.urls.iter().map(|u| u.to_string()).collect();
        urls.sort();
        urls
    }

    /// Result for a given seed, if its walk finished
    pub fn result_for(&self, seed: &Url) -> Option<&CrawlResult> {
        self.results.iter().find(|r| &r.seed == seed)
    }

    fn absorb(&mut self, result: CrawlResult) {
        self.urls.extend(result.visited.iter().cloned());
        self.results.push(result);
    }
}

/// Runs concurrent frontier walks, one per seed
///
/// Walks share nothing but the fetcher (and with it the HTTP connection pool).
/// There is no crawl-wide deadline: the coordinator waits for every walk, and a
/// slow seed only delays the final report.
pub struct Coordinator<F> {
    fetcher: Arc<F>,
    limits: WalkLimits,
}

impl<F: PageFetcher + 'static> Coordinator<F> {
    pub fn new(fetcher: Arc<F>, limits: WalkLimits) -> Self {
        Self { fetcher, limits }
    }

    /// Crawls every seed concurrently and merges the results
    ///
    /// Duplicate seeds are walked once. A walk that panics is logged and
    /// counted in [`CrawlReport::failed_walks`]; the other seeds are unaffected.
    pub async fn run(&self, seeds: Vec<Url>) -> CrawlReport {
        let mut unique = HashSet::new();
        let seeds: Vec<Url> = seeds
            .into_iter()
            .filter(|seed| unique.insert(seed.clone()))
            .collect();

        let mut report = CrawlReport {
            seed_count: seeds.len(),
            ..CrawlReport::default()
        };

        let mut walks = JoinSet::new();
        for seed in seeds {
            let fetcher = Arc::clone(&self.fetcher);
            let limits = self.limits;
            walks.spawn(async move {
                let mut walker = FrontierWalker::new(seed, fetcher, limits);
                walker.run().await
            });
        }

        tracing::info!("Started {} walks", report.seed_count);

        while let Some(joined) = walks.join_next().await {
            match joined {
                Ok(Ok(result)) => {
                    tracing::info!(
                        "Seed {} done: {} URLs, {} failed fetches ({} walks remaining)",
                        result.seed,
                        result.visited.len(),
                        result.failures(),
                        walks.len()
                    );
                    report.absorb(result);
                }
                Ok(Err(e)) => {
                    tracing::error!("Walk failed: {}", e);
                    report.failed_walks += 1;
                }
                Err(e) => {
                    tracing::error!("Walk task aborted: {}", e);
                    report.failed_walks += 1;
                }
            }
        }

        report
    }
}

/// Runs a complete crawl operation
///
/// 1. Load seeds from the manifest (fatal if missing or empty)
/// 2. Build the HTTP fetcher
/// 3. Walk every seed concurrently
/// 4. Write the merged URL list
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl finished and the URL list was written
/// * `Err(CrawlError)` - Manifest, client or output failure
pub async fn run_crawl(config: &Config) -> crate::Result<CrawlReport> {
    let seeds = load_seeds(Path::new(&config.input.manifest_path))?;

    let fetcher = Arc::new(HttpFetcher::new(&config.crawler)?);
    let coordinator = Coordinator::new(fetcher, WalkLimits::from_config(&config.crawler));

    let start_time = std::time::Instant::now();
    let report = coordinator.run(seeds).await;
    tracing::info!(
        "All walks finished in {:?}: {} URLs from {} seeds",
        start_time.elapsed(),
        report.total_urls(),
        report.seed_count
    );

    let urls_path = Path::new(&config.output.urls_path);
    let written = write_url_list(urls_path, &report.urls, config.output.sort)?;
    tracing::info!("Wrote {} URLs to {}", written, urls_path.display());

    Ok(report)
}
