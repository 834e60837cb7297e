// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search session.
//!
//! Pages come from the externally generated index file and never change once
//! loaded. Everything downstream (match results, rendered panels) borrows
//! from them and is thrown away after each evaluation.
//!
//! | Type            | Lifetime                      | Notes                         |
//! |-----------------|-------------------------------|-------------------------------|
//! | `IndexedPage`   | whole session                 | immutable, decoded leniently  |
//! | `DocumentIndex` | whole session, once loaded    | cheap to clone (shared slice) |
//! | `MatchResult`   | one evaluation                | borrows its page              |
//!
//! # Invariants
//!
//! - **DocumentIndex**: loaded in one piece. There is no partially loaded
//!   index; the store either hands out a complete one or an empty one.
//! - **MatchResult**: `score` is the character offset of the first occurrence
//!   of the normalized query in `lowercase(title + " " + content)`.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Character offset within a haystack.
///
/// This counts Unicode scalar values, NOT bytes. Two pages whose first match
/// sits at the same visual position get the same offset regardless of how
/// many multi-byte characters precede it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct CharOffset(pub u32);

impl CharOffset {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for slicing char vectors.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for CharOffset {
    fn from(offset: u32) -> Self {
        CharOffset(offset)
    }
}

impl From<CharOffset> for usize {
    fn from(offset: CharOffset) -> Self {
        offset.0 as usize
    }
}

impl fmt::Display for CharOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// One searchable page, as produced by the site's index generator.
///
/// `content` is the full plain-text body with markup already stripped.
/// Every field tolerates being missing, `null`, or a scalar in the JSON: the
/// generator is not under our control, and a sloppy entry should cost that
/// entry its text, not the whole index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedPage {
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,
}

impl IndexedPage {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// The lower-cased text the matcher scans: title, one space, content.
    pub fn haystack(&self) -> String {
        let mut haystack = String::with_capacity(self.title.len() + 1 + self.content.len());
        haystack.push_str(&self.title);
        haystack.push(' ');
        haystack.push_str(&self.content);
        haystack.to_lowercase()
    }
}

/// Accept strings, `null`, numbers and booleans; anything else is an error.
///
/// Mirrors what a browser script gets from `(value || "").toString()`: the
/// falsy scalars (`null`, `false`, `0`) all become the empty string.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Bool(false) => Ok(String::new()),
        serde_json::Value::Bool(true) => Ok("true".to_string()),
        serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => Ok(String::new()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string field, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// The loaded corpus: an ordered, immutable, shareable list of pages.
///
/// Cloning is a reference-count bump, so the store can hand the same index to
/// every evaluation without copying page text.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DocumentIndex {
    pages: Arc<[IndexedPage]>,
}

impl DocumentIndex {
    pub fn new(pages: Vec<IndexedPage>) -> Self {
        Self {
            pages: pages.into(),
        }
    }

    /// The index every failed load degrades to.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> &[IndexedPage] {
        &self.pages
    }
}

impl Deref for DocumentIndex {
    type Target = [IndexedPage];

    fn deref(&self) -> &Self::Target {
        &self.pages
    }
}

impl From<Vec<IndexedPage>> for DocumentIndex {
    fn from(pages: Vec<IndexedPage>) -> Self {
        Self::new(pages)
    }
}

impl fmt::Debug for DocumentIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentIndex")
            .field("pages", &self.pages.len())
            .finish()
    }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// A page that contains the query, with the offset of its first occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult<'a> {
    pub page: &'a IndexedPage,
    pub score: CharOffset,
}
