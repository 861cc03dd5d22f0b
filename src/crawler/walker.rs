//! Per-seed frontier walk
//!
//! A [`FrontierWalker`] explores one site starting from its seed URL. It keeps
//! two private sets: the frontier (discovered, not yet fetched) and the visited
//! set (fetched or attempted). Every URL moves from the frontier to the visited
//! set at most once, and only URLs that pass the scope filter for the seed are
//! ever enqueued.

use crate::config::CrawlerConfig;
use crate::crawler::fetcher::{FetchResult, PageFetcher};
use crate::crawler::parser::extract_hrefs;
use crate::state::{PageState, WalkState};
use crate::url::{canonicalize, is_in_scope};
use crate::CrawlError;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use url::Url;

/// Optional ceilings on a single seed's walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkLimits {
    /// Maximum number of pages to visit
    pub max_pages: Option<usize>,

    /// Maximum wall-clock time, checked before each fetch
    pub max_duration: Option<Duration>,
}

impl WalkLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn from_config(config: &CrawlerConfig) -> Self {
        Self {
            max_pages: config.max_pages_per_seed,
            max_duration: config.max_duration_per_seed(),
        }
    }
}

/// Why a walk stopped before its frontier was empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncationReason {
    PageLimit,
    Deadline,
}

impl fmt::Display for TruncationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageLimit => write!(f, "page limit reached"),
            Self::Deadline => write!(f, "time limit reached"),
        }
    }
}

/// How a walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    /// The frontier was exhausted
    Complete,

    /// A limit stopped the walk with `pending` URLs still in the frontier
    Truncated {
        reason: TruncationReason,
        pending: usize,
    },
}

/// Everything one seed's walk discovered
#[derive(Debug, Clone)]
pub struct CrawlResult {
    /// The canonical seed URL
    pub seed: Url,

    /// Every URL fetched or attempted, including the ones that failed
    pub visited: HashSet<Url>,

    pub outcome: WalkOutcome,

    /// Number of visited pages per fetch outcome
    pub pages_by_state: HashMap<PageState, usize>,
}

impl CrawlResult {
    /// Number of visited pages whose fetch did not produce content
    pub fn failures(&self) -> usize {
        self.pages_by_state
            .iter()
            .filter(|(state, _)| state.is_error())
            .map(|(_, count)| count)
            .sum()
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self.outcome, WalkOutcome::Truncated { .. })
    }
}

/// Visit-once, scope-bounded traversal of one seed's site
///
/// # Ordering
///
/// The frontier is a set, not a queue: the next URL to fetch is an arbitrary
/// member, so traversal order is neither breadth-first nor depth-first and may
/// differ between runs. The final visited set does not depend on that order
/// unless a [`WalkLimits`] ceiling truncates the walk.
///
/// Fetches are sequential; each page's links are merged into the frontier
/// before the next fetch starts.
pub struct FrontierWalker<F> {
    seed: Url,
    fetcher: Arc<F>,
    limits: WalkLimits,
    frontier: HashSet<Url>,
    visited: HashSet<Url>,
    pages_by_state: HashMap<PageState, usize>,
    state: WalkState,
}

impl<F: PageFetcher> FrontierWalker<F> {
    /// Creates an idle walker whose frontier holds only the seed
    pub fn new(seed: Url, fetcher: Arc<F>, limits: WalkLimits) -> Self {
        let mut frontier = HashSet::new();
        frontier.insert(seed.clone());

        Self {
            seed,
            fetcher,
            limits,
            frontier,
            visited: HashSet::new(),
            pages_by_state: HashMap::new(),
            state: WalkState::Idle,
        }
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    /// Runs the walk until the frontier is empty or a limit is hit
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlResult)` - The walk finished; fetch failures are counted, not returned
    /// * `Err(CrawlError::InvalidTransition)` - The walker was already run
    pub async fn run(&mut self) -> Result<CrawlResult, CrawlError> {
        self.transition(WalkState::Running)?;
        tracing::info!("Starting walk of {}", self.seed);

        let started = Instant::now();
        let mut outcome = WalkOutcome::Complete;

        while !self.frontier.is_empty() {
            if let Some(reason) = self.limit_reached(started) {
                outcome = WalkOutcome::Truncated {
                    reason,
                    pending: self.frontier.len(),
                };
                tracing::warn!(
                    "Walk of {} truncated ({}), {} URLs left in frontier",
                    self.seed,
                    reason,
                    self.frontier.len()
                );
                break;
            }

            let Some(url) = self.pop_frontier() else {
                break;
            };

            // Check-then-insert in one call: a URL is fetched at most once.
            if !self.visited.insert(url.clone()) {
                continue;
            }

            self.visit(&url).await;
        }

        self.transition(WalkState::Done)?;

        tracing::info!(
            "Finished walk of {}: {} URLs visited in {:?}",
            self.seed,
            self.visited.len(),
            started.elapsed()
        );

        Ok(CrawlResult {
            seed: self.seed.clone(),
            visited: std::mem::take(&mut self.visited),
            outcome,
            pages_by_state: std::mem::take(&mut self.pages_by_state),
        })
    }

    /// Fetches one page and merges its in-scope links into the frontier
    async fn visit(&mut self, url: &Url) {
        tracing::debug!("Fetching {}", url);

        let result = self.fetcher.fetch(url).await;
        let state = result.state();
        *self.pages_by_state.entry(state).or_insert(0) += 1;

        let (page, body) = match result {
            FetchResult::Success { final_url, body } => match self.landing_page(url, &final_url) {
                Some(page) => (page, body),
                None => return,
            },
            FetchResult::HttpError { status_code } => {
                tracing::warn!("Failed to fetch {}: HTTP {}", url, status_code);
                return;
            }
            FetchResult::NetworkError { error } => {
                tracing::warn!("Failed to fetch {}: {}", url, error);
                return;
            }
        };

        let mut added = 0;
        for href in extract_hrefs(&body) {
            let Some(link) = canonicalize(&href, &page) else {
                tracing::trace!("Dropping href {:?} on {}", href, page);
                continue;
            };

            if !is_in_scope(&link, &self.seed) || self.visited.contains(&link) {
                continue;
            }

            if self.frontier.insert(link) {
                added += 1;
            }
        }

        tracing::debug!(
            "{}: {} new links, frontier size {}",
            url,
            added,
            self.frontier.len()
        );
    }

    /// Where the fetch of `requested` actually landed after redirects
    ///
    /// Links are resolved against this URL. `None` means the redirect left the
    /// seed's scope: the page is a leaf and its body is not scanned.
    fn landing_page(&self, requested: &Url, final_url: &str) -> Option<Url> {
        let Some(page) = canonicalize(final_url, requested) else {
            tracing::warn!("{} redirected to unusable URL {:?}", requested, final_url);
            return None;
        };

        if !is_in_scope(&page, &self.seed) {
            tracing::info!(
                "{} redirected out of scope to {}, not following its links",
                requested,
                page
            );
            return None;
        }

        if page != *requested {
            tracing::debug!("{} redirected to {}", requested, page);
        }
        Some(page)
    }

    /// Removes an arbitrary member of the frontier
    fn pop_frontier(&mut self) -> Option<Url> {
        let next = self.frontier.iter().next()?.clone();
        self.frontier.take(&next)
    }

    fn limit_reached(&self, started: Instant) -> Option<TruncationReason> {
        if let Some(max_pages) = self.limits.max_pages {
            if self.visited.len() >= max_pages {
                return Some(TruncationReason::PageLimit);
            }
        }

        if let Some(max_duration) = self.limits.max_duration {
            if started.elapsed() >= max_duration {
                return Some(TruncationReason::Deadline);
            }
        }

        None
    }

    fn transition(&mut self, next: WalkState) -> Result<(), CrawlError> {
        if !self.state.can_transition_to(next) {
            return Err(CrawlError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        self.state = next;
        Ok(())
    }
}
