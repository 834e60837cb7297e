// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index sources: the one place that touches the network or disk.
//!
//! A source produces a fresh, `'static` future per call so the store can
//! share it between every evaluation waiting on the same load. Sources never
//! cache. Each `fetch()` is a real request, and HTTP sources ask the server
//! and any intermediaries not to serve a stored copy.

use super::decode_index;
use crate::error::IndexError;
use crate::types::IndexedPage;
use futures::future::{FutureExt, LocalBoxFuture};
use std::path::PathBuf;

/// The future a source hands back: the decoded pages, or why not.
pub type FetchFuture = LocalBoxFuture<'static, Result<Vec<IndexedPage>, IndexError>>;

/// Something the index can be loaded from.
pub trait IndexSource {
    /// Start one load.
    fn fetch(&self) -> FetchFuture;

    /// Human-readable location for log lines.
    fn location(&self) -> &str;
}

/// Pages already in memory (embedding, tests, CLI pipelines).
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pages: Vec<IndexedPage>,
}

impl MemorySource {
    pub fn new(pages: Vec<IndexedPage>) -> Self {
        Self { pages }
    }
}

impl IndexSource for MemorySource {
    fn fetch(&self) -> FetchFuture {
        let pages = self.pages.clone();
        async move { Ok(pages) }.boxed_local()
    }

    fn location(&self) -> &str {
        "memory"
    }
}

/// A JSON index file on local disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    display: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

impl IndexSource for FileSource {
    fn fetch(&self) -> FetchFuture {
        let path = self.path.clone();
        let display = self.display.clone();
        async move {
            let bytes = std::fs::read(&path).map_err(|e| IndexError::Io {
                path: display,
                message: e.to_string(),
            })?;
            decode_index(&bytes)
        }
        .boxed_local()
    }

    fn location(&self) -> &str {
        &self.display
    }
}

/// The index served over HTTP(S), fetched with reqwest.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

#[cfg(feature = "http")]
impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[cfg(feature = "http")]
impl IndexSource for HttpSource {
    fn fetch(&self) -> FetchFuture {
        use reqwest::header::{CACHE_CONTROL, PRAGMA};

        let client = self.client.clone();
        let url = self.url.clone();
        async move {
            let network = |e: reqwest::Error| IndexError::Network {
                url: url.clone(),
                message: e.to_string(),
            };

            let response = client
                .get(&url)
                .header(CACHE_CONTROL, "no-store")
                .header(PRAGMA, "no-cache")
                .send()
                .await
                .map_err(network)?;

            let status = response.status();
            if !status.is_success() {
                return Err(IndexError::Status {
                    url: url.clone(),
                    status: status.as_u16(),
                });
            }

            let body = response.bytes().await.map_err(network)?;
            decode_index(&body)
        }
        .boxed_local()
    }

    fn location(&self) -> &str {
        &self.url
    }
}
