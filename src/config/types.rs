use serde::Deserialize;
use std::time::Duration;

/// Default per-request timeout, in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for Sitewalk
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CrawlerConfig {
    /// Timeout applied to every individual GET request (seconds)
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Stop a seed's walk after this many pages have been visited
    #[serde(default)]
    pub max_pages_per_seed: Option<usize>,

    /// Stop a seed's walk after this much wall-clock time (seconds)
    #[serde(default)]
    pub max_seconds_per_seed: Option<u64>,
}

impl CrawlerConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn max_duration_per_seed(&self) -> Option<Duration> {
        self.max_seconds_per_seed.map(Duration::from_secs)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            max_pages_per_seed: None,
            max_seconds_per_seed: None,
        }
    }
}

/// Seed manifest location
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InputConfig {
    /// JSON manifest produced by the sitemap builder
    #[serde(default = "default_manifest_path")]
    pub manifest_path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Path of the newline-delimited URL list
    #[serde(default = "default_urls_path")]
    pub urls_path: String,

    /// Sort URLs before writing so repeated runs produce comparable files
    #[serde(default = "default_sort")]
    pub sort: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            urls_path: default_urls_path(),
            sort: default_sort(),
        }
    }
}

fn default_fetch_timeout() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

fn default_manifest_path() -> String {
    "site_titles_urls.json".to_string()
}

fn default_urls_path() -> String {
    "urls.txt".to_string()
}

fn default_sort() -> bool {
    true
}
