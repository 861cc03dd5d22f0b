use url::Url;

/// Extracts the lowercase host from a URL
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitewalk::url::extract_host;
///
/// let url = Url::parse("https://Math.Example.EDU/path").unwrap();
/// assert_eq!(extract_host(&url), Some("math.example.edu".to_string()));
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Checks if a host is the seed host or one of its subdomains
///
/// A subdomain must end with `"." + seed_host`; a host that merely ends with the
/// same characters (`badexample.com` for `example.com`) is out of scope.
///
/// # Examples
///
/// ```
/// use sitewalk::url::host_in_scope;
///
/// assert!(host_in_scope("example.com", "example.com"));
/// assert!(host_in_scope("sub.example.com", "example.com"));
/// assert!(!host_in_scope("badexample.com", "example.com"));
/// ```
pub fn host_in_scope(candidate: &str, seed_host: &str) -> bool {
    if seed_host.is_empty() {
        return false;
    }
    candidate == seed_host
        || candidate
            .strip_suffix(seed_host)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Decides whether a canonical URL belongs to the seed's site
///
/// The host must satisfy [`host_in_scope`] and any explicit port must match
/// the seed's. The scheme is not compared, so an `http` link on an `https`
/// site stays in scope.
pub fn is_in_scope(candidate: &Url, seed: &Url) -> bool {
    let (Some(host), Some(seed_host)) = (extract_host(candidate), extract_host(seed)) else {
        return false;
    };

    candidate.port() == seed.port() && host_in_scope(&host, &seed_host)
}
