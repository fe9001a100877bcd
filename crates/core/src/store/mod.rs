// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persistent key-value storage.
//!
//! The store has two scopes: [`Scope::Sync`] for state that follows the user
//! across machines (mappings, history, preferences) and [`Scope::Local`] for
//! device-only state (lifetime counter, reminders, armed timers).
//!
//! Callers read a whole structure, change it in memory, and write it back.
//! There is no compare-and-swap: two overlapping read-modify-write cycles on
//! the same key resolve as last-writer-wins.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use crate::error::{Error, Result};

/// Storage keys shared by every component.
pub mod keys {
    /// Sync: configured prefix mappings.
    pub const MAPPINGS: &str = "mappings";
    /// Sync: the history ledger.
    pub const HISTORY: &str = "searchHistory";
    /// Sync: smart-link preference.
    pub const SMART_LINKS: &str = "smartLinksEnabled";
    /// Sync: theme preference.
    pub const THEME: &str = "themePreference";
    /// Local: lifetime dispatch counter.
    pub const LIFETIME: &str = "searchLifetimeCount";
    /// Local: prefix of reminder alarm records.
    pub const ALARM_PREFIX: &str = "alarm-";
}

/// Storage area a value lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Sync,
    Local,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Sync => "sync",
            Scope::Local => "local",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persistent key-value store holding JSON values.
pub trait Store {
    /// Returns the stored values for `keys`. Missing keys are absent from the
    /// returned map.
    fn get(&self, scope: Scope, keys: &[&str]) -> Result<Map<String, Value>>;

    /// Writes every entry of `items`, replacing existing values.
    fn set(&self, scope: Scope, items: Map<String, Value>) -> Result<()>;

    /// Deletes `keys`. Deleting a missing key is not an error.
    fn remove(&self, scope: Scope, keys: &[&str]) -> Result<()>;

    /// Lists every key present in `scope`.
    fn keys(&self, scope: Scope) -> Result<Vec<String>>;
}

/// Typed access on top of [`Store`].
pub trait StoreExt: Store {
    /// Reads `key`, falling back to `default` when it is absent or null.
    fn load_or<T: DeserializeOwned>(&self, scope: Scope, key: &str, default: T) -> Result<T> {
        let mut found = self.get(scope, &[key])?;
        match found.remove(key) {
            None | Some(Value::Null) => Ok(default),
            Some(value) => serde_json::from_value(value).map_err(|e| {
                Error::CorruptedData(format!("{scope} key '{key}' is malformed: {e}"))
            }),
        }
    }

    /// Reads `key`, returning `None` when it is absent.
    fn load<T: DeserializeOwned>(&self, scope: Scope, key: &str) -> Result<Option<T>> {
        self.load_or(scope, key, None)
    }

    /// Serializes `value` and writes it under `key`.
    fn save<T: Serialize>(&self, scope: Scope, key: &str, value: &T) -> Result<()> {
        let mut items = Map::new();
        items.insert(key.to_string(), serde_json::to_value(value)?);
        tracing::debug!(%scope, key, "store write");
        self.set(scope, items)
    }
}

impl<S: Store + ?Sized> StoreExt for S {}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
