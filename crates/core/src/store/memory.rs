// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Mutex;

use super::{Scope, Store};
use crate::error::Result;

/// In-process store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sync: Mutex<BTreeMap<String, Value>>,
    local: Mutex<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn area(&self, scope: Scope) -> std::sync::MutexGuard<'_, BTreeMap<String, Value>> {
        let area = match scope {
            Scope::Sync => &self.sync,
            Scope::Local => &self.local,
        };
        area.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Store for MemoryStore {
    fn get(&self, scope: Scope, keys: &[&str]) -> Result<Map<String, Value>> {
        let area = self.area(scope);
        Ok(keys
            .iter()
            .filter_map(|k| area.get(*k).map(|v| (k.to_string(), v.clone())))
            .collect())
    }

    fn set(&self, scope: Scope, items: Map<String, Value>) -> Result<()> {
        self.area(scope).extend(items);
        Ok(())
    }

    fn remove(&self, scope: Scope, keys: &[&str]) -> Result<()> {
        let mut area = self.area(scope);
        for key in keys {
            area.remove(*key);
        }
        Ok(())
    }

    fn keys(&self, scope: Scope) -> Result<Vec<String>> {
        Ok(self.area(scope).keys().cloned().collect())
    }
}
