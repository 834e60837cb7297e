// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result rendering.
//!
//! Rendering is split in two. `render()` is pure: matches + query in, a
//! `ResultPanel` out. Applying a panel to a `ResultSurface` (the DOM, a
//! terminal, a test recorder) is the only side effect, and every application
//! replaces whatever the surface showed before. No diffing.
//!
//! Surfaces receive plain text only. Titles and snippets come straight out
//! of the corpus, and the surface must never interpret them as markup.

pub mod snippet;

use crate::config::SearchConfig;
use crate::query::Query;
use crate::types::MatchResult;
use serde::Serialize;
use snippet::{extract_snippet, SnippetWindow};

/// One clickable result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEntry {
    pub url: String,
    pub title: String,
    pub snippet: String,
}

/// What the results panel should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ResultPanel {
    /// No (qualifying) query: panel hidden and emptied.
    Hidden,
    /// A real query with zero matches: a single placeholder.
    Empty { message: String },
    /// Matches, best first.
    Entries { entries: Vec<ResultEntry> },
}

impl ResultPanel {
    pub fn is_visible(&self) -> bool {
        !matches!(self, ResultPanel::Hidden)
    }

    pub fn entries(&self) -> &[ResultEntry] {
        match self {
            ResultPanel::Entries { entries } => entries,
            _ => &[],
        }
    }

    /// Push this panel onto a surface, replacing its previous content.
    pub fn apply(&self, surface: &mut dyn ResultSurface) {
        match self {
            ResultPanel::Hidden => surface.hide(),
            ResultPanel::Empty { message } => surface.show_placeholder(message),
            ResultPanel::Entries { entries } => surface.show_entries(entries),
        }
    }
}

/// Somewhere results can be displayed.
///
/// Each call fully replaces the previous output. Implementations must insert
/// text as text (DOM text nodes, escaped output), never as markup.
pub trait ResultSurface {
    /// Clear everything and hide the panel.
    fn hide(&mut self);

    /// Clear, then show a single informational entry.
    fn show_placeholder(&mut self, message: &str);

    /// Clear, then show these entries in order.
    fn show_entries(&mut self, entries: &[ResultEntry]);
}

/// Build the panel for a query's matches.
///
/// A missing query (too short) always hides, even if `results` is somehow
/// non-empty; a real query with no results gets the empty-state placeholder.
pub fn render(results: &[MatchResult<'_>], query: Option<&Query>, config: &SearchConfig) -> ResultPanel {
    let Some(query) = query else {
        return ResultPanel::Hidden;
    };

    if results.is_empty() {
        return ResultPanel::Empty {
            message: config.empty_message.clone(),
        };
    }

    let window = SnippetWindow {
        before: config.snippet_before,
        after: config.snippet_after,
        fallback: config.fallback_snippet_len,
    };

    let entries = results
        .iter()
        .map(|result| ResultEntry {
            url: result.page.url.clone(),
            title: result.page.title.clone(),
            snippet: extract_snippet(&result.page.content, query.as_str(), window),
        })
        .collect();

    ResultPanel::Entries { entries }
}
