// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User preferences and whole-configuration snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::mapping::{Mapping, MappingResolver, MappingRow, MappingSet};
use crate::store::{keys, Scope, Store, StoreExt};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(Error::InvalidTheme(s.trim().to_string())),
        }
    }
}

/// Exported configuration: mappings plus preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSnapshot {
    pub mappings: Vec<Mapping>,
    #[serde(default)]
    pub smart_links_enabled: bool,
    #[serde(default)]
    pub theme_preference: Theme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Preference storage.
pub struct Settings<'a> {
    store: &'a dyn Store,
}

impl<'a> Settings<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Settings { store }
    }

    pub fn theme(&self) -> Result<Theme> {
        self.store.load_or(Scope::Sync, keys::THEME, Theme::default())
    }

    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.store.save(Scope::Sync, keys::THEME, &theme)
    }

    pub fn smart_links_enabled(&self) -> Result<bool> {
        self.store.load_or(Scope::Sync, keys::SMART_LINKS, false)
    }

    pub fn set_smart_links_enabled(&self, enabled: bool) -> Result<()> {
        self.store.save(Scope::Sync, keys::SMART_LINKS, &enabled)
    }

    /// Captures the current configuration.
    pub fn export(&self, now: DateTime<Utc>, version: &str) -> Result<ConfigSnapshot> {
        Ok(ConfigSnapshot {
            mappings: MappingResolver::new(self.store).load()?.as_slice().to_vec(),
            smart_links_enabled: self.smart_links_enabled()?,
            theme_preference: self.theme()?,
            exported_at: Some(now),
            version: Some(version.to_string()),
        })
    }

    /// Validates `snapshot` and replaces mappings and preferences in a
    /// single write. Invalid mappings (including duplicate prefixes) reject
    /// the whole import and leave the store untouched.
    pub fn import(&self, snapshot: &ConfigSnapshot) -> Result<MappingSet> {
        let rows: Vec<MappingRow> = snapshot.mappings.iter().map(MappingRow::from).collect();
        let set = MappingSet::from_rows(&rows)?;

        let mut items = serde_json::Map::new();
        items.insert(
            keys::MAPPINGS.to_string(),
            serde_json::to_value(set.as_slice())?,
        );
        items.insert(
            keys::SMART_LINKS.to_string(),
            serde_json::Value::Bool(snapshot.smart_links_enabled),
        );
        items.insert(
            keys::THEME.to_string(),
            serde_json::to_value(snapshot.theme_preference)?,
        );
        self.store.set(Scope::Sync, items)?;
        tracing::info!(mappings = set.len(), "configuration imported");
        Ok(set)
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
