// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Incremental search for a static documentation site.
//!
//! The site generator emits a JSON array of `{ url, title, content }` pages.
//! This crate turns a search box into a live view over that array: fetch it
//! once, lazily, then match every settled keystroke against it by plain
//! case-insensitive substring and show the ten earliest hits with a context
//! snippet.
//!
//! # Architecture
//!
//! ```text
//!  input events ──▶ session ──▶ debounce ──▶ evaluate
//!  (typing, focus,     │                        │
//!   click, escape)     │                        ▼
//!                      │            index::IndexStore ──▶ IndexSource
//!                      │              (lazy, one load       (fetch, file,
//!                      │               in flight)            http, memory)
//!                      │                        │
//!                      │                        ▼
//!                      │            search::search_query
//!                      │              (scoring + ranking)
//!                      │                        │
//!                      ▼                        ▼
//!               render::ResultSurface ◀── render::render
//!               (DOM, terminal, test)     (snippets, placeholder)
//! ```
//!
//! Everything runs on one thread. The `runtime` module supplies the executor
//! and clock: tokio's `LocalSet` natively, the browser event loop in WASM.
//!
//! # Usage
//!
//! ```
//! use docsearch::{search, IndexedPage};
//!
//! let pages = vec![
//!     IndexedPage::new("/install", "Installation", "Run the installer."),
//!     IndexedPage::new("/faq", "FAQ", "How do I install plugins?"),
//! ];
//!
//! let hits = search(&pages, "install");
//! assert_eq!(hits.len(), 2);
//! assert_eq!(hits[0].page.url, "/install");
//! ```

pub mod config;
pub mod debounce;
pub mod error;
pub mod index;
pub mod query;
pub mod render;
pub mod runtime;
pub mod scoring;
pub mod search;
pub mod session;
pub mod types;
pub mod utils;

pub mod testing;

pub use config::SearchConfig;
pub use debounce::Debouncer;
pub use error::{ConfigError, IndexError};
pub use index::{decode_index, FileSource, IndexSource, IndexStore, MemorySource};
#[cfg(feature = "http")]
pub use index::HttpSource;
pub use query::Query;
pub use render::{render, ResultEntry, ResultPanel, ResultSurface};
pub use runtime::Runtime;
pub use scoring::ranking::TieBreak;
pub use search::{search, search_query};
pub use session::{PointerTarget, SearchSession, SessionStats};
pub use types::{CharOffset, DocumentIndex, IndexedPage, MatchResult};

#[cfg(feature = "wasm")]
pub use runtime::wasm::mount_docs_search;
