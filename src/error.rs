// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Nothing here is ever fatal to the host page. `IndexError` is logged by the
//! store and turned into an empty index; `ConfigError` only surfaces at mount
//! time or from the CLI.

use thiserror::Error;

/// Why the document index could not be loaded.
///
/// Cloneable because one failed attempt is reported to every evaluation that
/// was waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The request never produced a response (DNS, connection reset, CORS...).
    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },

    /// The server answered with a non-success status.
    #[error("fetching {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not a JSON array of pages.
    #[error("invalid search index: {0}")]
    Decode(String),

    /// Reading a local index file failed.
    #[error("reading {path}: {message}")]
    Io { path: String, message: String },
}

impl From<serde_json::Error> for IndexError {
    fn from(err: serde_json::Error) -> Self {
        IndexError::Decode(err.to_string())
    }
}

/// Invalid `SearchConfig` values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("invalid options: {0}")]
    Invalid(String),
}
