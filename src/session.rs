// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search session: one search box, one results panel, one index.
//!
//! This is the input controller. Hosts translate their events (DOM listeners,
//! terminal lines, test scripts) into the four entry points below and the
//! session does the rest:
//!
//! | Event                      | Effect                                          |
//! |----------------------------|-------------------------------------------------|
//! | `on_query_changed(text)`   | debounce, then evaluate                         |
//! | `on_focus(text)`           | evaluate immediately if `text` is long enough   |
//! | `on_pointer(Outside)`      | hide results (input text untouched)             |
//! | `on_escape()`              | hide results (host blurs the input)             |
//!
//! # Evaluation
//!
//! ```text
//! stamp ──▶ parse query ──▶ ensure index ──▶ still newest? ──▶ match ──▶ render ──▶ surface
//!               │ too short                       │ no
//!               ▼                                 ▼
//!             hide                             discard
//! ```
//!
//! Every evaluation takes a sequence stamp before its only await (the index
//! load). If a newer evaluation started while it was waiting, its result is
//! stale and is dropped instead of overwriting the newer one's output.

use crate::config::SearchConfig;
use crate::debounce::Debouncer;
use crate::index::{IndexSource, IndexStore};
use crate::query::Query;
use crate::render::{render, ResultPanel, ResultSurface};
use crate::runtime::Runtime;
use crate::search::search_query;
use crate::utils::char_len;
use futures::future::FutureExt;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Where a pointer interaction landed, as far as the session cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Input,
    Results,
    Outside,
}

/// Counters for diagnostics and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Evaluations started (debounced or focus-triggered).
    pub evaluations: u64,
    /// Times the matcher actually ran.
    pub matcher_runs: u64,
    /// Evaluations dropped because a newer one started while they waited.
    pub stale_discarded: u64,
    /// Panels pushed to the surface.
    pub renders: u64,
}

/// A search session. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct SearchSession {
    inner: Rc<SessionInner>,
}

struct SessionInner {
    config: SearchConfig,
    store: IndexStore,
    debouncer: Debouncer,
    runtime: Rc<dyn Runtime>,
    surface: RefCell<Box<dyn ResultSurface>>,
    latest: Cell<u64>,
    stats: Cell<SessionStats>,
}

impl SearchSession {
    pub fn new(
        config: SearchConfig,
        source: Rc<dyn IndexSource>,
        runtime: Rc<dyn Runtime>,
        surface: Box<dyn ResultSurface>,
    ) -> Self {
        let debouncer = Debouncer::new(config.debounce(), runtime.clone());
        Self {
            inner: Rc::new(SessionInner {
                config,
                store: IndexStore::new(source),
                debouncer,
                runtime,
                surface: RefCell::new(surface),
                latest: Cell::new(0),
                stats: Cell::new(SessionStats::default()),
            }),
        }
    }

    /// The input's value changed. Evaluation happens after the debounce
    /// delay, and only for the last value in a burst.
    pub fn on_query_changed(&self, text: &str) {
        let inner = self.inner.clone();
        let text = text.to_string();
        tracing::trace!(query = %text, "query changed");
        self.inner.debouncer.schedule(async move {
            inner.evaluate(&text).await;
        });
    }

    /// The input gained focus while holding `text`.
    ///
    /// Restores results for a query that is already long enough, without
    /// waiting out the debounce. A pending debounced evaluation is left alone.
    pub fn on_focus(&self, text: &str) {
        if char_len(text) < self.inner.config.min_query_len {
            return;
        }
        let inner = self.inner.clone();
        let text = text.to_string();
        self.inner.runtime.spawn(
            async move {
                inner.evaluate(&text).await;
            }
            .boxed_local(),
        );
    }

    /// A pointer interaction somewhere on the page.
    pub fn on_pointer(&self, target: PointerTarget) {
        if target == PointerTarget::Outside {
            self.hide();
        }
    }

    /// Escape pressed in the input.
    pub fn on_escape(&self) {
        self.hide();
    }

    /// Hide and clear the results panel.
    pub fn hide(&self) {
        self.inner.commit(&ResultPanel::Hidden);
    }

    /// Evaluate `text` right now, bypassing the debouncer.
    ///
    /// Returns the panel that was rendered, or `None` if a newer evaluation
    /// overtook this one.
    pub async fn evaluate(&self, text: &str) -> Option<ResultPanel> {
        self.inner.evaluate(text).await
    }

    /// Settle the last query: a debounced evaluation that hasn't fired yet,
    /// or one still waiting on the index load, is replaced by an immediate
    /// evaluation of `text` that this call awaits.
    ///
    /// Returns `None` when nothing was outstanding.
    pub async fn flush(&self, text: &str) -> Option<ResultPanel> {
        if !self.has_pending_query() && !self.inner.store.is_loading() {
            return None;
        }
        self.inner.debouncer.cancel();
        self.inner.evaluate(text).await
    }

    pub fn config(&self) -> &SearchConfig {
        &self.inner.config
    }

    pub fn store(&self) -> &IndexStore {
        &self.inner.store
    }

    pub fn stats(&self) -> SessionStats {
        self.inner.stats.get()
    }

    /// Whether a debounced evaluation is waiting to run.
    pub fn has_pending_query(&self) -> bool {
        self.inner.debouncer.is_pending()
    }
}

impl SessionInner {
    async fn evaluate(&self, raw: &str) -> Option<ResultPanel> {
        let stamp = self.latest.get() + 1;
        self.latest.set(stamp);
        self.update_stats(|s| s.evaluations += 1);

        let Some(query) = Query::parse(raw, self.config.min_query_len) else {
            let panel = ResultPanel::Hidden;
            self.commit(&panel);
            return Some(panel);
        };

        let index = self.store.ensure_loaded().await;

        let latest = self.latest.get();
        if latest != stamp {
            tracing::debug!(stamp, latest, query = %query, "discarding stale search");
            self.update_stats(|s| s.stale_discarded += 1);
            return None;
        }

        if index.is_empty() {
            let panel = ResultPanel::Hidden;
            self.commit(&panel);
            return Some(panel);
        }

        let results = search_query(
            &index,
            &query,
            self.config.max_results,
            self.config.tie_break,
        );
        self.update_stats(|s| s.matcher_runs += 1);
        tracing::debug!(query = %query, matches = results.len(), "search evaluated");

        let panel = render(&results, Some(&query), &self.config);
        self.commit(&panel);
        Some(panel)
    }

    fn commit(&self, panel: &ResultPanel) {
        panel.apply(self.surface.borrow_mut().as_mut());
        self.update_stats(|s| s.renders += 1);
    }

    fn update_stats(&self, f: impl FnOnce(&mut SessionStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }
}
