/// Page state definitions for visited pages
use std::fmt;

/// What happened when a visited page was fetched
///
/// Every state counts the page as discovered; only `Processed` pages
/// contribute outbound links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    /// HTTP 200 and the body was scanned for links
    Processed,

    /// Any status other than 200
    HttpError,

    /// Could not be reached (timeout, connection refused, DNS failure, body read error)
    Unreachable,
}

impl PageState {
    /// Returns true if the page yielded content
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Processed)
    }

    /// Returns true if this represents a failed fetch
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::HttpError => "http_error",
            Self::Unreachable => "unreachable",
        }
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
