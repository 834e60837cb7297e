// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.
//!
//! Everything here counts characters, not bytes. Scores and snippet windows
//! are expressed in Unicode scalar values so that an accented title doesn't
//! shift a match further down the ranking than its plain-ASCII twin.

/// Normalize a query for comparison: trim, then lowercase.
///
/// Inner whitespace is left alone. "getting  started" only matches pages
/// that really contain two spaces, same as the page script always did.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Number of characters in a string.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Character offset of the first occurrence of `needle` in `haystack`.
///
/// `str::find` hands back a byte offset; this converts it.
pub fn find_char_offset(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte_offset| haystack[..byte_offset].chars().count())
}

/// Case-insensitive search that reports its hit in the ORIGINAL text's
/// character coordinates.
///
/// Lowercasing can change the number of characters ('İ' becomes two), so
/// searching a lowercased copy and slicing the original with the same offset
/// would drift. Instead every lowercased char remembers which original char it
/// came from.
///
/// The copy is produced by `str::to_lowercase`, the same folding the matcher
/// and `Query` use, so a word-final 'Σ' becomes 'ς' here too. Context-aware
/// folding never changes a char's expansion length, so per-char counts still
/// line the copy up with the original.
///
/// `needle_lower` must already be lowercase. Returns `(start, end)` as a
/// half-open char range into `text`.
pub fn find_case_insensitive(text: &str, needle_lower: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = needle_lower.chars().collect();
    if needle.is_empty() {
        return None;
    }

    let origins = text
        .chars()
        .enumerate()
        .flat_map(|(origin, c)| std::iter::repeat(origin).take(c.to_lowercase().count()));
    let lowered: Vec<(char, usize)> = text.to_lowercase().chars().zip(origins).collect();

    if lowered.len() < needle.len() {
        return None;
    }

    (0..=lowered.len() - needle.len())
        .find(|&start| {
            lowered[start..start + needle.len()]
                .iter()
                .zip(&needle)
                .all(|((lc, _), nc)| lc == nc)
        })
        .map(|start| {
            let first = lowered[start].1;
            let last = lowered[start + needle.len() - 1].1;
            (first, last + 1)
        })
}
