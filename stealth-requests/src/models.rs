//! Data models for responses and their derived views.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::StealthError;

/// A column-oriented table reconstruction.
///
/// Keys are header labels in source column order; each value is that
/// column's cell text across the table's data rows. All columns of one
/// record have the same length.
pub type TableRecord = IndexMap<String, Vec<String>>;

/// A completed HTTP response as handed over by the transport layer.
///
/// The enrichment core consumes this type; it never produces one. The
/// transport layer is responsible for redirects, retries, and session
/// state before the handoff.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawResponse {
    /// Raw response body.
    pub content: Vec<u8>,
    /// Decoded body text, used for all parsing.
    pub text: String,
    /// Final URL after any redirect chain.
    pub url: String,
    /// HTTP status code.
    pub status_code: u16,
}

impl RawResponse {
    /// Creates a raw response from already-decoded text.
    #[must_use]
    pub fn new(
        content: impl Into<Vec<u8>>,
        text: impl Into<String>,
        url: impl Into<String>,
        status_code: u16,
    ) -> Self {
        Self {
            content: content.into(),
            text: text.into(),
            url: url.into(),
            status_code,
        }
    }

    /// Creates a raw response by decoding the body as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`StealthError::Utf8`] if the body is not valid UTF-8.
    pub fn from_bytes(
        content: Vec<u8>,
        url: impl Into<String>,
        status_code: u16,
    ) -> Result<Self, StealthError> {
        let text = String::from_utf8(content.clone())?;
        Ok(Self {
            content,
            text,
            url: url.into(),
            status_code,
        })
    }

    /// Whether the response carries a 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Head-level metadata extracted from a page.
///
/// Every field is independently optional: an element absent from the
/// document leaves its field as `None` without affecting the others.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageMetadata {
    /// Page title.
    pub title: Option<String>,
    /// Meta description.
    pub description: Option<String>,
    /// Open Graph image URL.
    pub thumbnail: Option<String>,
    /// Author name.
    pub author: Option<String>,
    /// Keywords, comma-split and trimmed.
    pub keywords: Option<Vec<String>>,
    /// Twitter site handle.
    pub twitter_handle: Option<String>,
    /// Robots directives, comma-split and trimmed.
    pub robots: Option<Vec<String>>,
    /// Canonical URL.
    pub canonical: Option<String>,
}

impl PageMetadata {
    /// Creates new empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Whether no field was populated at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.thumbnail.is_none()
            && self.author.is_none()
            && self.keywords.is_none()
            && self.twitter_handle.is_none()
            && self.robots.is_none()
            && self.canonical.is_none()
    }
}
