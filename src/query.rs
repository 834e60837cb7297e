// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Queries that are worth evaluating.
//!
//! A `Query` can only be built from text whose normalized form is long
//! enough. Anything shorter is a degenerate query: not an error, just a
//! request to hide the results panel.

use crate::utils::{char_len, normalize};
use std::fmt;

/// Default minimum normalized length for a query to be evaluated.
pub const MIN_QUERY_LEN: usize = 2;

/// A normalized (trimmed, lowercased) query of at least the minimum length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    normalized: String,
}

impl Query {
    /// Normalize `raw` and keep it if it has at least `min_len` characters.
    pub fn parse(raw: &str, min_len: usize) -> Option<Self> {
        let normalized = normalize(raw);
        if normalized.is_empty() || char_len(&normalized) < min_len {
            return None;
        }
        Some(Self { normalized })
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}
