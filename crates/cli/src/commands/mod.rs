// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod history;
pub mod mapping;
pub mod open;
pub mod parse;
pub mod remind;
pub mod stats;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::io::Read;

use qf_core::{IssueKey, SqliteStore};
use serde::Serialize;

use crate::cli::TextArgs;
use crate::config::Config;
use crate::error::Result;

/// Helper to open the store named by the configuration.
pub fn open_store() -> Result<(SqliteStore, Config)> {
    let config = Config::load()?;
    let path = config.store_path()?;
    tracing::debug!(path = %path.display(), "opening store");
    let store = SqliteStore::open(&path)?;
    Ok((store, config))
}

/// The command's text, from arguments or stdin.
pub fn read_text(args: &TextArgs) -> Result<String> {
    if args.wants_stdin() {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(args.joined())
    }
}

pub fn parse_key(raw: &str) -> Result<IssueKey> {
    Ok(IssueKey::parse(raw)?)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
