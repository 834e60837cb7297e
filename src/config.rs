// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! The defaults reproduce the docs layout the search box was built for:
//! `/search.json`, a 120 ms debounce, two-character minimum, ten results.
//! From JavaScript every field is optional:
//!
//! ```js
//! mountDocsSearch({ indexUrl: "/docs/search.json", maxResults: 8 });
//! ```

use crate::error::ConfigError;
use crate::query::MIN_QUERY_LEN;
use crate::scoring::ranking::TieBreak;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_INDEX_URL: &str = "/search.json";
pub const DEFAULT_DEBOUNCE_MS: u64 = 120;
pub const DEFAULT_MAX_RESULTS: usize = 10;
pub const DEFAULT_SNIPPET_BEFORE: usize = 40;
pub const DEFAULT_SNIPPET_AFTER: usize = 60;
pub const DEFAULT_FALLBACK_SNIPPET_LEN: usize = 120;
pub const DEFAULT_EMPTY_MESSAGE: &str = "No matches found.";
pub const DEFAULT_INPUT_SELECTOR: &str = "[data-docs-search-input]";
pub const DEFAULT_RESULTS_SELECTOR: &str = "[data-docs-search-results]";

/// Everything a search session can be tuned with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Where the index JSON lives.
    pub index_url: String,
    /// Quiet period after the last keystroke before a query runs.
    pub debounce_ms: u64,
    /// Minimum normalized query length, in characters.
    pub min_query_len: usize,
    /// Result cap.
    pub max_results: usize,
    /// Snippet context before the match, in characters.
    pub snippet_before: usize,
    /// Snippet context after the match, in characters.
    pub snippet_after: usize,
    /// Snippet length when the query only matched the title.
    pub fallback_snippet_len: usize,
    /// Secondary ordering for equal scores.
    pub tie_break: TieBreak,
    /// Placeholder shown when a real query finds nothing.
    pub empty_message: String,
    pub input_selector: String,
    pub results_selector: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_len: MIN_QUERY_LEN,
            max_results: DEFAULT_MAX_RESULTS,
            snippet_before: DEFAULT_SNIPPET_BEFORE,
            snippet_after: DEFAULT_SNIPPET_AFTER,
            fallback_snippet_len: DEFAULT_FALLBACK_SNIPPET_LEN,
            tie_break: TieBreak::default(),
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            input_selector: DEFAULT_INPUT_SELECTOR.to_string(),
            results_selector: DEFAULT_RESULTS_SELECTOR.to_string(),
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Reject values that would make the search box silently useless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_results == 0 {
            return Err(ConfigError::Zero {
                field: "maxResults",
            });
        }
        if self.min_query_len == 0 {
            return Err(ConfigError::Zero {
                field: "minQueryLen",
            });
        }
        if self.index_url.trim().is_empty() {
            return Err(ConfigError::Empty { field: "indexUrl" });
        }
        if self.input_selector.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "inputSelector",
            });
        }
        if self.results_selector.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "resultsSelector",
            });
        }
        Ok(())
    }

    /// Parse a JSON options object, then validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
