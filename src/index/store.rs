// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lazy index store.
//!
//! The index is not fetched until someone actually searches. After that:
//!
//! ```text
//!            ensure_loaded()              fetch ok
//!  NotLoaded ──────────────▶ Loading ─────────────▶ Loaded(index)
//!      ▲                        │
//!      └────────────────────────┘
//!              fetch failed (logged, caller gets an empty index)
//! ```
//!
//! While `Loading`, further callers await the same in-flight attempt instead
//! of issuing their own request. There are no locks: everything runs on one
//! thread, and the state check and the transition to `Loading` happen without
//! an await between them.
//!
//! Each attempt carries a number. Only the waiter that sees its own attempt
//! still current moves the state on, so a slow waiter on a failed attempt
//! can't clobber a newer attempt started in the meantime.

use super::source::IndexSource;
use crate::error::IndexError;
use crate::types::DocumentIndex;
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type PendingLoad = Shared<LocalBoxFuture<'static, Result<DocumentIndex, IndexError>>>;

enum LoadState {
    NotLoaded,
    Loading { attempt: u64, pending: PendingLoad },
    Loaded(DocumentIndex),
}

/// Holds the document index for one page session.
pub struct IndexStore {
    source: Rc<dyn IndexSource>,
    state: RefCell<LoadState>,
    attempts: Cell<u64>,
}

impl IndexStore {
    pub fn new(source: Rc<dyn IndexSource>) -> Self {
        Self {
            source,
            state: RefCell::new(LoadState::NotLoaded),
            attempts: Cell::new(0),
        }
    }

    /// Return the index, loading it first if needed.
    ///
    /// Never fails: a failed load is logged and yields an empty index, and the
    /// next call starts a fresh attempt.
    pub async fn ensure_loaded(&self) -> DocumentIndex {
        let (attempt, pending) = match self.begin_or_join() {
            Ok(index) => return index,
            Err(in_flight) => in_flight,
        };

        let outcome = pending.await;

        let mut state = self.state.borrow_mut();
        let current = matches!(&*state, LoadState::Loading { attempt: a, .. } if *a == attempt);

        match outcome {
            Ok(index) => {
                if current {
                    tracing::info!(
                        source = self.source.location(),
                        pages = index.len(),
                        "search index loaded"
                    );
                    *state = LoadState::Loaded(index.clone());
                }
                index
            }
            Err(err) => {
                if current {
                    tracing::error!(
                        source = self.source.location(),
                        attempt,
                        error = %err,
                        "failed to load docs search index"
                    );
                    *state = LoadState::NotLoaded;
                }
                DocumentIndex::empty()
            }
        }
    }

    /// Either the loaded index, or the attempt to await (joining the one in
    /// flight or starting a new one).
    fn begin_or_join(&self) -> Result<DocumentIndex, (u64, PendingLoad)> {
        let mut state = self.state.borrow_mut();
        match &*state {
            LoadState::Loaded(index) => Ok(index.clone()),
            LoadState::Loading { attempt, pending } => {
                tracing::debug!(attempt, "joining in-flight index load");
                Err((*attempt, pending.clone()))
            }
            LoadState::NotLoaded => {
                let attempt = self.attempts.get() + 1;
                self.attempts.set(attempt);
                tracing::debug!(source = self.source.location(), attempt, "fetching search index");

                let pending = self
                    .source
                    .fetch()
                    .map(|result| result.map(DocumentIndex::from))
                    .boxed_local()
                    .shared();
                *state = LoadState::Loading {
                    attempt,
                    pending: pending.clone(),
                };
                Err((attempt, pending))
            }
        }
    }

    /// The index, if it has been loaded.
    pub fn loaded(&self) -> Option<DocumentIndex> {
        match &*self.state.borrow() {
            LoadState::Loaded(index) => Some(index.clone()),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(&*self.state.borrow(), LoadState::Loaded(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(&*self.state.borrow(), LoadState::Loading { .. })
    }

    /// How many fetches have been issued so far.
    pub fn fetch_count(&self) -> u64 {
        self.attempts.get()
    }
}
