// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors surfaced by the `qf` command line.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] qf_core::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("no mapping for prefix: {0}\n  hint: run 'qf mapping list' to see configured prefixes")]
    MappingNotFound(String),

    #[error("no history entry for {0}\n  hint: run 'qf history list' to see remembered issues")]
    HistoryNotFound(String),

    #[error("invalid time '{0}'\n  hint: use minutes from now (e.g. 30m, 2h, 1d) or RFC 3339 (2026-05-01T09:00:00Z)")]
    InvalidTime(String),

    #[error("{0} is required")]
    FieldRequired(&'static str),

    #[error("some keys failed to open: {opened} opened, {failed} failed")]
    PartialDispatch { opened: usize, failed: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for qfrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
