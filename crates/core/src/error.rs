// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for qf-core operations.
//!
//! Finding no keys in a piece of text and failing to resolve a key are not
//! errors: they are reported through return values. Everything here is a
//! failure the caller has to act on.

use thiserror::Error;

/// All possible errors that can occur in qf-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid issue key: '{0}'\n  hint: keys look like ABC-123")]
    InvalidKey(String),

    #[error("invalid prefix: '{0}'\n  hint: a prefix is a letter followed by one or more letters or digits")]
    InvalidPrefix(String),

    #[error("invalid base URL: '{0}'\n  hint: use an absolute URL such as https://tracker.example.com/browse/")]
    InvalidBaseUrl(String),

    #[error("mapping row {row} is incomplete\n  hint: each used row needs both a prefix and a base URL")]
    IncompleteMapping { row: usize },

    #[error("duplicate prefix: {0}\n  hint: each prefix must be unique (case-insensitive)")]
    DuplicatePrefix(String),

    #[error("unknown theme: '{0}'\n  hint: valid themes are light and dark")]
    InvalidTheme(String),

    #[error("failed to open {url}: {reason}")]
    Navigation { url: String, reason: String },

    #[error("notification failed: {0}")]
    Notification(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

impl Error {
    /// Returns true if the error came from reading or writing the store.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            Error::Storage(_) | Error::Database(_) | Error::Json(_) | Error::CorruptedData(_)
        )
    }
}

/// A specialized Result type for qf-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
