//! URL handling module for Sitewalk
//!
//! This module turns raw hrefs into canonical URLs (the deduplication key of a
//! walk) and decides whether a canonical URL belongs to a seed's site.

mod canonical;
mod scope;

// Re-export main functions
pub use canonical::{canonicalize, canonicalize_seed};
pub use scope::{extract_host, host_in_scope, is_in_scope};
