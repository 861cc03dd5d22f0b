use crate::{UrlError, UrlResult};
use url::Url;

/// Href prefixes that never name a crawlable page
const REJECTED_PREFIXES: &[&str] = &["#", "javascript:", "mailto:", "tel:", "data:"];

/// Canonicalizes a raw href found on the page at `base`
///
/// # Canonicalization Steps
///
/// 1. Trim surrounding whitespace; reject empty hrefs
/// 2. Reject fragment-only hrefs and non-page schemes (`javascript:`, `mailto:`, ...)
/// 3. Resolve against `base` (relative, `../`, protocol-relative and absolute forms)
/// 4. Reject anything that is not HTTP(S) or has no host
/// 5. Drop the query string and fragment
///
/// The result is scheme + host (+ explicit port) + path. Two URLs that differ
/// only in query or fragment canonicalize to the same value.
///
/// # Returns
///
/// * `Some(Url)` - The canonical URL
/// * `None` - The href was malformed or does not point at a page
///
/// # Examples
///
/// ```
/// use sitewalk::url::canonicalize;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/a/b").unwrap();
/// let url = canonicalize("../c?x=1#top", &base).unwrap();
/// assert_eq!(url.as_str(), "https://example.com/c");
///
/// assert!(canonicalize("#frag", &base).is_none());
/// assert!(canonicalize("mailto:dept@example.com", &base).is_none());
/// ```
pub fn canonicalize(href: &str, base: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if REJECTED_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
    {
        return None;
    }

    let resolved = base.join(href).ok()?;
    strip(resolved).ok()
}

/// Canonicalizes a seed URL taken from the manifest
///
/// Unlike [`canonicalize`], the reason for rejecting a seed is reported so it
/// can be logged.
///
/// # Examples
///
/// ```
/// use sitewalk::url::canonicalize_seed;
///
/// let seed = canonicalize_seed("https://math.example.edu").unwrap();
/// assert_eq!(seed.as_str(), "https://math.example.edu/");
/// ```
pub fn canonicalize_seed(raw: &str) -> UrlResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| UrlError::Parse(format!("{}: {}", raw, e)))?;
    strip(url)
}

/// Validates scheme and host, then removes query and fragment
fn strip(mut url: Url) -> UrlResult<Url> {
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(UrlError::MissingHost),
    }

    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}
