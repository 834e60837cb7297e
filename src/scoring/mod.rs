// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matches get their numbers.
//!
//! A score is the character offset of the first occurrence of the query in a
//! page's haystack. No term frequency, no field boosts. Lower is better.

pub mod ranking;

use crate::types::{CharOffset, IndexedPage};
use crate::utils::find_char_offset;

/// Score one page against an already-normalized query.
///
/// `None` means the page does not contain the query at all.
pub fn score_page(page: &IndexedPage, normalized_query: &str) -> Option<CharOffset> {
    let haystack = page.haystack();
    find_char_offset(&haystack, normalized_query)
        .map(|offset| CharOffset(u32::try_from(offset).unwrap_or(u32::MAX)))
}
