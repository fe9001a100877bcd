// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed store.
//!
//! Values are JSON text in a single `kv` table keyed by `(scope, key)`.

use rusqlite::{params, Connection};
use serde_json::{Map, Value};
use std::path::Path;

use super::{Scope, Store};
use crate::error::{Error, Result};

/// SQL schema for the key-value table.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
    scope TEXT NOT NULL,
    key TEXT NOT NULL,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    PRIMARY KEY (scope, key)
);
"#;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the store at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        conn.execute_batch(SCHEMA)?;
        Ok(SqliteStore { conn })
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(SqliteStore { conn })
    }
}

fn decode(scope: Scope, key: &str, raw: &str) -> Result<Value> {
    serde_json::from_str(raw)
        .map_err(|e| Error::CorruptedData(format!("{scope} key '{key}' is not valid JSON: {e}")))
}

impl Store for SqliteStore {
    fn get(&self, scope: Scope, keys: &[&str]) -> Result<Map<String, Value>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT value FROM kv WHERE scope = ?1 AND key = ?2")?;
        let mut found = Map::new();
        for key in keys {
            let mut rows = stmt.query(params![scope.as_str(), key])?;
            if let Some(row) = rows.next()? {
                let raw: String = row.get(0)?;
                found.insert(key.to_string(), decode(scope, key, &raw)?);
            }
        }
        Ok(found)
    }

    fn set(&self, scope: Scope, items: Map<String, Value>) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO kv (scope, key, value) VALUES (?1, ?2, ?3)
                 ON CONFLICT(scope, key) DO UPDATE SET
                   value = excluded.value,
                   updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
            )?;
            for (key, value) in &items {
                stmt.execute(params![scope.as_str(), key, serde_json::to_string(value)?])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn remove(&self, scope: Scope, keys: &[&str]) -> Result<()> {
        let mut stmt = self
            .conn
            .prepare_cached("DELETE FROM kv WHERE scope = ?1 AND key = ?2")?;
        for key in keys {
            stmt.execute(params![scope.as_str(), key])?;
        }
        Ok(())
    }

    fn keys(&self, scope: Scope) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT key FROM kv WHERE scope = ?1 ORDER BY key")?;
        let keys = stmt
            .query_map(params![scope.as_str()], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(keys)
    }
}
