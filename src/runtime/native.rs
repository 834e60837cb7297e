// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokio runtime binding.
//!
//! Tasks go through `spawn_local`, so a `TokioRuntime` must be used from
//! inside a `tokio::task::LocalSet`. That matches the browser model (one
//! thread, cooperative scheduling) and lets tests pause the clock to step
//! through debounce windows deterministically.

use super::Runtime;
use futures::future::{FutureExt, LocalBoxFuture};
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRuntime;

impl Runtime for TokioRuntime {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        tokio::task::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        tokio::time::sleep(duration).boxed_local()
    }
}
