// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The matcher.
//!
//! # Algorithm
//!
//! 1. Normalize the query (trim, lowercase). Too short or empty index → nothing.
//! 2. Score every page: char offset of the first occurrence in its haystack.
//!    Pages without an occurrence drop out.
//! 3. Stable sort ascending by score, with the configured tie-break.
//! 4. Keep the first `limit`.
//!
//! Every page is scanned on every query. Documentation sites have hundreds of
//! pages, not millions, and a linear scan over a few megabytes of text finishes
//! well inside one frame.

use crate::config::DEFAULT_MAX_RESULTS;
use crate::query::{Query, MIN_QUERY_LEN};
use crate::scoring::ranking::{compare_matches, TieBreak};
use crate::scoring::score_page;
use crate::types::{IndexedPage, MatchResult};

/// Search with the default settings (2-char minimum, 10 results, index order
/// on ties).
///
/// # Example
///
/// ```
/// use docsearch::{search, IndexedPage};
///
/// let pages = vec![IndexedPage::new("/a", "Alpha Guide", "Install the alpha tool")];
/// let results = search(&pages, "alpha");
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].score.get(), 0);
/// ```
pub fn search<'a>(index: &'a [IndexedPage], query: &str) -> Vec<MatchResult<'a>> {
    match Query::parse(query, MIN_QUERY_LEN) {
        Some(query) => search_query(index, &query, DEFAULT_MAX_RESULTS, TieBreak::Index),
        None => Vec::new(),
    }
}

/// Search with an already-validated query and explicit limits.
pub fn search_query<'a>(
    index: &'a [IndexedPage],
    query: &Query,
    limit: usize,
    tie_break: TieBreak,
) -> Vec<MatchResult<'a>> {
    if index.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut matches: Vec<MatchResult<'a>> = index
        .iter()
        .filter_map(|page| {
            score_page(page, query.as_str()).map(|score| MatchResult { page, score })
        })
        .collect();

    // sort_by is stable: equal scores keep index order
    matches.sort_by(|a, b| compare_matches(a, b, tie_break));
    matches.truncate(limit);
    matches
}
