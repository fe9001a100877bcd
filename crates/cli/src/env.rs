// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! The variable name constants are generated by `build.rs` and live in the
//! [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

/// Returns the value of `QF_STATE_DIR` if set.
pub fn state_dir() -> Option<PathBuf> {
    non_empty(vars::QF_STATE_DIR).map(PathBuf::from)
}

/// Returns the value of `QF_CONFIG_DIR` if set.
pub fn config_dir() -> Option<PathBuf> {
    non_empty(vars::QF_CONFIG_DIR).map(PathBuf::from)
}

/// Returns the browser command from `QF_BROWSER` if set.
pub fn browser() -> Option<String> {
    non_empty(vars::QF_BROWSER)
}

/// Returns the log filter directive from `QF_LOG` if set.
pub fn log_filter() -> Option<String> {
    non_empty(vars::QF_LOG)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
