// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The document index: where it comes from and how it is held.
//!
//! - **source**: the fetch seam (HTTP, browser `fetch`, file, memory)
//! - **store**: lazy, at-most-one-in-flight loading with retry on failure
//!
//! The wire format is deliberately dumb: a JSON array of
//! `{ "url", "title", "content" }` objects written by the site generator.

pub mod source;
pub mod store;

use crate::error::IndexError;
use crate::types::IndexedPage;

pub use source::{FetchFuture, FileSource, IndexSource, MemorySource};
#[cfg(feature = "http")]
pub use source::HttpSource;
pub use store::IndexStore;

/// Decode an index body.
///
/// Anything other than a JSON array of page objects is a decode error. Page
/// fields themselves are decoded leniently (see `IndexedPage`).
pub fn decode_index(bytes: &[u8]) -> Result<Vec<IndexedPage>, IndexError> {
    Ok(serde_json::from_slice(bytes)?)
}
