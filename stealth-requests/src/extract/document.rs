//! Lenient HTML parsing and tree helpers.
//!
//! Parsing goes through html5ever, which recovers from unclosed tags and
//! invalid nesting the same way a browser does: the result is always a
//! single well-formed tree, never an error. The tree is an arena of nodes
//! (ego-tree), so traversal terminates even over degenerate recovery
//! output.

use scraper::{ElementRef, Html};

/// Parses raw HTML text into a traversable document tree.
#[must_use]
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Direct child elements of `element`, in document order.
pub(crate) fn child_elements(element: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    element.children().filter_map(ElementRef::wrap)
}

/// Direct child elements whose tag name is in `names`.
pub(crate) fn children_named<'a>(
    element: ElementRef<'a>,
    names: &'static [&'static str],
) -> impl Iterator<Item = ElementRef<'a>> {
    child_elements(element).filter(move |child| names.contains(&child.value().name()))
}

/// Concatenated descendant text with entity decoding applied by the
/// parser, runs of whitespace collapsed to single spaces, and the result
/// trimmed.
#[must_use]
pub(crate) fn normalized_text(element: ElementRef<'_>) -> String {
    let joined: String = element.text().collect();
    collapse_whitespace(&joined)
}

/// Collapses whitespace runs to single spaces and trims the ends.
#[must_use]
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
