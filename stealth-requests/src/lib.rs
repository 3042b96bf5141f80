//! # Stealth Requests
//!
//! A Rust implementation of the stealth-requests response enrichment
//! layer.
//!
//! Given a completed HTTP response, this crate derives structured views
//! from its HTML body:
//!
//! - **Tables**: column-oriented records keyed by header label
//! - **Metadata**: title, description, Open Graph image, author,
//!   keywords, Twitter handle, robots directives, canonical URL
//! - **Links and images**: `href`/`src` attributes resolved to absolute
//!   URLs against the final response URL
//! - **Emails and phone numbers**: regex matches over the body text
//!
//! Parsing is lenient (html5ever recovery), extraction never fails on
//! malformed markup, and every derived view is computed lazily and
//! cached for the lifetime of the response.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stealth_requests::prelude::*;
//!
//! // The transport layer hands over a completed response.
//! let raw = RawResponse::new(body_bytes, body_text, final_url, 200);
//! let resp = StealthResponse::new(raw, elapsed_seconds);
//!
//! for record in resp.tables() {
//!     println!("{record:?}");
//! }
//! println!("{:?}", resp.meta().title);
//! println!("{:?}", resp.links());
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod errors;
pub mod extract;
pub mod models;
pub mod response;


pub use errors::StealthError;
pub use models::{PageMetadata, RawResponse, TableRecord};
pub use response::StealthResponse;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::StealthError;
    pub use crate::models::{PageMetadata, RawResponse, TableRecord};
    pub use crate::response::StealthResponse;
}
