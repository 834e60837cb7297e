// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how matches get sorted.
//!
//! There is exactly one signal, the offset of the first occurrence. Earlier
//! wins. Because the haystack is `title + " " + content`, a title hit always
//! lands before any content hit of the same page, which is the only field
//! weighting there is.
//!
//! Ties are where it gets subtle. The default keeps the order pages appear in
//! the index file, which is whatever the site generator emitted. Sites that
//! regenerate the index and want stable ordering anyway can opt into a URL
//! tie-break.

use crate::types::MatchResult;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Secondary ordering applied to matches with equal scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Keep index order (stable sort, no secondary key).
    #[default]
    Index,
    /// Lexicographic by URL, so ordering survives index regeneration.
    Url,
}

/// Compare two matches for ranking.
///
/// Sort order:
/// 1. **Score** - ascending, earliest occurrence first
/// 2. **URL** - only with `TieBreak::Url`
///
/// Anything still equal compares `Equal`, and the caller's stable sort keeps
/// index order.
pub fn compare_matches(a: &MatchResult<'_>, b: &MatchResult<'_>, tie_break: TieBreak) -> Ordering {
    match a.score.cmp(&b.score) {
        Ordering::Equal => match tie_break {
            TieBreak::Index => Ordering::Equal,
            TieBreak::Url => a.page.url.cmp(&b.page.url),
        },
        ord => ord,
    }
}
