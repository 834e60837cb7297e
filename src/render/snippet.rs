// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Context snippets for result entries.
//!
//! Given a page's content and the query, cut a window around the first
//! case-insensitive occurrence:
//!
//! ```text
//!           before (40)        match        after (60)
//!   …  ────────────────────[ query ]──────────────────────  …
//!   ^ only if the window                               ^ only if the window
//!     doesn't start at 0                                 stops short of the end
//! ```
//!
//! When the query only matched the title there is nothing to center on, so
//! the snippet is the opening of the content followed by an ellipsis.

use crate::utils::find_case_insensitive;

pub const ELLIPSIS: char = '…';

/// Window sizes, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetWindow {
    pub before: usize,
    pub after: usize,
    pub fallback: usize,
}

impl Default for SnippetWindow {
    fn default() -> Self {
        Self {
            before: crate::config::DEFAULT_SNIPPET_BEFORE,
            after: crate::config::DEFAULT_SNIPPET_AFTER,
            fallback: crate::config::DEFAULT_FALLBACK_SNIPPET_LEN,
        }
    }
}

/// Extract a snippet of `content` around `query_lower` (already lowercase).
pub fn extract_snippet(content: &str, query_lower: &str, window: SnippetWindow) -> String {
    let chars: Vec<char> = content.chars().collect();

    let Some((match_start, match_end)) = find_case_insensitive(content, query_lower) else {
        let opening: String = chars.iter().take(window.fallback).collect();
        let mut snippet = opening.trim().to_string();
        snippet.push(ELLIPSIS);
        return snippet;
    };

    let start = match_start.saturating_sub(window.before);
    let end = chars.len().min(match_end.saturating_add(window.after));

    let body: String = chars[start..end].iter().collect();
    let mut snippet = String::with_capacity(body.len() + 2 * ELLIPSIS.len_utf8());
    if start > 0 {
        snippet.push(ELLIPSIS);
    }
    snippet.push_str(body.trim());
    if end < chars.len() {
        snippet.push(ELLIPSIS);
    }
    snippet
}
