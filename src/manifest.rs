//! Seed manifest loading
//!
//! The manifest is the sitemap builder's JSON output: an array of records, one
//! per department site. Only `url` is required.
//!
//! ```json
//! [
//!   { "text": "Mathematics", "url": "https://math.example.edu", "sublinks": ["people"] }
//! ]
//! ```

use crate::url::canonicalize_seed;
use crate::ManifestError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use url::Url;

/// One manifest record
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    /// Root URL of the site to crawl
    pub url: String,

    /// Display name of the site, used in log lines
    #[serde(default)]
    pub text: Option<String>,

    /// Relative links the sitemap builder found on the root page
    #[serde(default)]
    pub sublinks: Vec<String>,
}

/// Reads and parses the manifest file
pub fn load_manifest(path: &Path) -> Result<Vec<ManifestEntry>, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Turns manifest entries into canonical, deduplicated seed URLs
///
/// Entries whose URL cannot be canonicalized are skipped with a warning.
/// Order of first appearance is kept.
pub fn seeds_from_entries(entries: &[ManifestEntry]) -> Vec<Url> {
    let mut seen = HashSet::new();
    let mut seeds = Vec::new();

    for entry in entries {
        let label = entry.text.as_deref().unwrap_or("unnamed site");
        match canonicalize_seed(&entry.url) {
            Ok(seed) => {
                if seen.insert(seed.clone()) {
                    seeds.push(seed);
                } else {
                    tracing::debug!("Duplicate seed {} ({})", seed, label);
                }
            }
            Err(e) => {
                tracing::warn!("Skipping seed {:?} ({}): {}", entry.url, label, e);
            }
        }
    }

    seeds
}

/// Loads the manifest and returns its seed URLs
///
/// # Returns
///
/// * `Ok(Vec<Url>)` - The usable seeds; empty when the manifest lists none
/// * `Err(ManifestError)` - The file is missing, unreadable or not a manifest
pub fn load_seeds(path: &Path) -> Result<Vec<Url>, ManifestError> {
    let entries = load_manifest(path)?;
    let seeds = seeds_from_entries(&entries);

    if seeds.is_empty() {
        tracing::warn!(
            "Manifest {} has no usable seed URLs ({} entries), nothing to crawl",
            path.display(),
            entries.len()
        );
        return Ok(seeds);
    }

    tracing::info!(
        "Loaded {} seeds from {} ({} entries)",
        seeds.len(),
        path.display(),
        entries.len()
    );

    Ok(seeds)
}
