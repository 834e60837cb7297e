// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Last-write-wins debouncing.
//!
//! Every `schedule()` bumps a generation counter and spawns a sleeper. When a
//! sleeper wakes it only runs its task if its generation is still the newest,
//! so a burst of keystrokes produces exactly one evaluation, for the last
//! one, `delay` after it. Superseded sleepers wake up and quietly do nothing.
//!
//! This is not rate limiting. Intermediate queries are dropped, not queued.

use crate::runtime::Runtime;
use futures::future::FutureExt;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

pub struct Debouncer {
    delay: Duration,
    runtime: Rc<dyn Runtime>,
    generation: Rc<Cell<u64>>,
    pending: Rc<Cell<bool>>,
}

impl Debouncer {
    pub fn new(delay: Duration, runtime: Rc<dyn Runtime>) -> Self {
        Self {
            delay,
            runtime,
            generation: Rc::new(Cell::new(0)),
            pending: Rc::new(Cell::new(false)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace whatever is pending with `task`, to run after the delay.
    ///
    /// `task` is not polled until the delay elapses, so it can be built
    /// eagerly from the current input value.
    pub fn schedule<F>(&self, task: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.pending.set(true);

        let current = self.generation.clone();
        let pending = self.pending.clone();
        let sleep = self.runtime.sleep(self.delay);

        self.runtime.spawn(
            async move {
                sleep.await;
                if current.get() != generation {
                    tracing::trace!(generation, "debounced task superseded");
                    return;
                }
                pending.set(false);
                task.await;
            }
            .boxed_local(),
        );
    }

    /// Drop the pending task, if any.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get() + 1);
        self.pending.set(false);
    }

    /// Whether a scheduled task is still waiting out its delay.
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}
