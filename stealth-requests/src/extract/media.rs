//! Anchor and image reference collection.
//!
//! References come out in document order, resolved against the response's
//! final URL. Duplicates are preserved; elements without the relevant
//! attribute are skipped.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::resolve::absolutize;

static ANCHORS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("valid selector"));
static IMAGES: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("valid selector"));

/// Collects every anchor's `href`, resolved against `base`.
#[must_use]
pub fn links(document: &Html, base: &str) -> Vec<String> {
    collect_attr(document, &ANCHORS, "href", base)
}

/// Collects every image's `src`, resolved against `base`.
#[must_use]
pub fn images(document: &Html, base: &str) -> Vec<String> {
    collect_attr(document, &IMAGES, "src", base)
}

fn collect_attr(document: &Html, selector: &Selector, attribute: &str, base: &str) -> Vec<String> {
    let found: Vec<String> = document
        .select(selector)
        .filter_map(|el| el.value().attr(attribute))
        .map(|reference| absolutize(base, reference))
        .collect();
    tracing::trace!(count = found.len(), attribute, "collected references");
    found
}
