// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: turn a query and a loaded index into ranked matches.
//!
//! Substring containment over `lowercase(title + " " + content)`, ranked by
//! where the first hit lands. Pure and deterministic: same index, same query,
//! same answer.

mod matcher;

pub use matcher::{search, search_query};
