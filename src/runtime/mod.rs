// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime bindings: where tasks run and how time passes.
//!
//! The session logic is written once against the `Runtime` trait. Two
//! flavors implement it: tokio (native CLI and tests) and the browser event
//! loop (WASM). Both are single-threaded, which is what lets the rest of the
//! crate get away with `Rc` and `RefCell` instead of locks.

#[cfg(feature = "native")]
pub mod native;

#[cfg(feature = "wasm")]
pub mod wasm;

use futures::future::LocalBoxFuture;
use std::time::Duration;

/// A single-threaded task executor with a clock.
pub trait Runtime {
    /// Run `task` to completion in the background, on this thread.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    /// A future that resolves after `duration`.
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}
