//! Head-level metadata extraction.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::document::collapse_whitespace;
use crate::models::PageMetadata;

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("valid selector"));
static DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="description"]"#).expect("valid selector"));
static OG_IMAGE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[property="og:image"]"#).expect("valid selector"));
static AUTHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="author"]"#).expect("valid selector"));
static KEYWORDS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="keywords"]"#).expect("valid selector"));
static TWITTER_SITE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="twitter:site"]"#).expect("valid selector"));
static ROBOTS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="robots"]"#).expect("valid selector"));
static CANONICAL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"link[rel="canonical"]"#).expect("valid selector"));

/// Reads the fixed set of head-level elements into a flat record.
///
/// Always produces a record; each field is `None` when its source element
/// (or its attribute) is absent.
#[must_use]
pub fn metadata(document: &Html) -> PageMetadata {
    PageMetadata {
        title: document
            .select(&TITLE)
            .next()
            .map(|el| collapse_whitespace(&el.text().collect::<String>())),
        description: attr_value(document, &DESCRIPTION, "content"),
        thumbnail: attr_value(document, &OG_IMAGE, "content"),
        author: attr_value(document, &AUTHOR, "content"),
        keywords: attr_value(document, &KEYWORDS, "content").map(|v| split_list(&v)),
        twitter_handle: attr_value(document, &TWITTER_SITE, "content"),
        robots: attr_value(document, &ROBOTS, "content").map(|v| split_list(&v)),
        canonical: attr_value(document, &CANONICAL, "href"),
    }
}

fn attr_value(document: &Html, selector: &Selector, attribute: &str) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attribute))
        .map(str::to_string)
}

/// Splits a comma-separated attribute value, trimming each piece.
fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(|piece| piece.trim().to_string()).collect()
}
