//! The enriched response wrapper and its extraction cache.

use std::fmt;
use std::sync::OnceLock;

use scraper::Html;

use crate::errors::StealthError;
use crate::extract;
use crate::models::{PageMetadata, RawResponse, TableRecord};

/// A completed HTTP response enriched with derived views of its HTML body.
///
/// Each derived accessor walks the shared parsed document on first access
/// and memoizes the result for the lifetime of the response: repeated
/// reads return the identical value, not merely an equal one, and the
/// underlying extraction runs at most once per accessor.
pub struct StealthResponse {
    raw: RawResponse,
    elapsed: f64,
    document: OnceLock<Html>,
    tables: OnceLock<Vec<TableRecord>>,
    meta: OnceLock<PageMetadata>,
    links: OnceLock<Vec<String>>,
    images: OnceLock<Vec<String>>,
    emails: OnceLock<Vec<String>>,
    phone_numbers: OnceLock<Vec<String>>,
}

impl StealthResponse {
    /// Wraps a completed response and its elapsed-time measurement.
    #[must_use]
    pub fn new(raw: RawResponse, elapsed: f64) -> Self {
        Self {
            raw,
            elapsed,
            document: OnceLock::new(),
            tables: OnceLock::new(),
            meta: OnceLock::new(),
            links: OnceLock::new(),
            images: OnceLock::new(),
            emails: OnceLock::new(),
            phone_numbers: OnceLock::new(),
        }
    }

    /// HTTP status code.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.raw.status_code
    }

    /// Decoded body text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.raw.text
    }

    /// Raw body bytes.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.raw.content
    }

    /// Final URL after any redirect chain.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.raw.url
    }

    /// Elapsed request time in seconds.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StealthError::Json`] if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, StealthError> {
        Ok(serde_json::from_str(self.text())?)
    }

    /// Every qualifying table, reconstructed column-oriented, in document
    /// order.
    #[must_use]
    pub fn tables(&self) -> &[TableRecord] {
        self.tables
            .get_or_init(|| extract::tables(self.document()))
    }

    /// Head-level page metadata.
    #[must_use]
    pub fn meta(&self) -> &PageMetadata {
        self.meta.get_or_init(|| extract::metadata(self.document()))
    }

    /// Every anchor `href` in document order, resolved to absolute URLs.
    #[must_use]
    pub fn links(&self) -> &[String] {
        self.links
            .get_or_init(|| extract::links(self.document(), self.url()))
    }

    /// Every image `src` in document order, resolved to absolute URLs.
    #[must_use]
    pub fn images(&self) -> &[String] {
        self.images
            .get_or_init(|| extract::images(self.document(), self.url()))
    }

    /// Email addresses found in the body text, deduplicated by first
    /// occurrence.
    #[must_use]
    pub fn emails(&self) -> &[String] {
        self.emails.get_or_init(|| extract::emails(self.text()))
    }

    /// Phone numbers found in the body text, in match order.
    #[must_use]
    pub fn phone_numbers(&self) -> &[String] {
        self.phone_numbers
            .get_or_init(|| extract::phone_numbers(self.text()))
    }

    /// The parsed document, built from the body text on first need.
    fn document(&self) -> &Html {
        self.document
            .get_or_init(|| extract::parse_document(self.text()))
    }
}

impl fmt::Display for StealthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<StealthResponse [Status: {} Elapsed Time: {} seconds]>",
            self.raw.status_code,
            format_elapsed(self.elapsed)
        )
    }
}

impl fmt::Debug for StealthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Renders elapsed seconds with at least one fractional digit.
fn format_elapsed(seconds: f64) -> String {
    if seconds.fract() == 0.0 {
        format!("{seconds:.1}")
    } else {
        seconds.to_string()
    }
}
