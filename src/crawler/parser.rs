//! HTML link extraction
//!
//! Only `<a href>` values are returned, raw and unresolved. Scripts,
//! stylesheets, `<link>` elements and other link-bearing attributes are
//! ignored; resolution and filtering happen in the canonicalizer.

use scraper::{Html, Selector};

/// Extracts the raw `href` values of all anchor elements
///
/// Parsing is best effort: html5ever recovers from malformed markup, so broken
/// pages yield whatever anchors survive and never an error.
///
/// # Example
///
/// ```
/// use sitewalk::crawler::extract_hrefs;
///
/// let html = r#"<p><a href="/people">People</a><a name="top">no href</a>"#;
/// assert_eq!(extract_hrefs(html), vec!["/people".to_string()]);
/// ```
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| href.to_string())
        .collect()
}
