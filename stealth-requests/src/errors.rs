//! Error types for the stealth-requests enrichment layer.
//!
//! Extraction itself is total: malformed markup and absent elements
//! degrade to empty or `None` results. Errors only arise at the response
//! boundary, when decoding bytes or parsing the body as JSON.

use thiserror::Error;

/// The error type for response boundary operations.
#[derive(Debug, Error)]
pub enum StealthError {
    /// The response body was not valid UTF-8.
    #[error("response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The response body could not be parsed as JSON.
    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
