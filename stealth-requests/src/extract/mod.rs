//! Extractors that derive structured views from a parsed document.
//!
//! This module provides:
//! - Lenient HTML parsing into a traversable tree
//! - Column-oriented table reconstruction
//! - Head-level metadata mapping
//! - Link and image collection with URL resolution
//! - Regex extraction of emails and phone numbers
//!
//! Each extractor is a pure function over the parsed document (or the
//! decoded body text) and never fails: malformed markup simply yields
//! less structure.

mod document;
mod media;
mod metadata;
mod patterns;
mod resolve;
mod tables;

pub use document::parse_document;
pub use media::{images, links};
pub use metadata::metadata;
pub use patterns::{emails, phone_numbers};
pub use resolve::absolutize;
pub use tables::tables;
