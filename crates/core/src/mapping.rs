// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prefix to base-URL mappings.
//!
//! A mapping binds a key prefix (`ABC`) to the URL issues with that prefix
//! live under (`https://tracker.example.com/browse/`). The URL for a key is
//! the base URL followed by the key.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::key::{extract_prefix, is_valid_prefix, normalize_base, normalize_prefix};
use crate::store::{keys, Scope, Store, StoreExt};

/// One configured prefix mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mapping {
    /// Optional display name for the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Normalized (uppercase) prefix.
    #[serde(default)]
    pub prefix: String,
    /// Normalized base URL ending in `/`.
    #[serde(default)]
    pub base_url: String,
}

impl Mapping {
    /// URL an issue with this prefix opens at.
    pub fn url_for(&self, key: &str) -> String {
        format!("{}{}", self.base_url, key)
    }
}

/// Raw, unvalidated mapping input as a user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingRow {
    pub project: String,
    pub prefix: String,
    pub base_url: String,
}

impl MappingRow {
    pub fn new(project: &str, prefix: &str, base_url: &str) -> Self {
        MappingRow {
            project: project.to_string(),
            prefix: prefix.to_string(),
            base_url: base_url.to_string(),
        }
    }
}

impl From<&Mapping> for MappingRow {
    fn from(m: &Mapping) -> Self {
        MappingRow {
            project: m.project.clone().unwrap_or_default(),
            prefix: m.prefix.clone(),
            base_url: m.base_url.clone(),
        }
    }
}

/// A validated set of mappings with unique prefixes, in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingSet {
    mappings: Vec<Mapping>,
}

impl MappingSet {
    /// Validates user rows into a mapping set.
    ///
    /// Rows where every field is blank are skipped. A used row must have both
    /// a prefix and a base URL. Prefixes are compared after normalization, so
    /// `abc` and `ABC` conflict and the later one is rejected.
    pub fn from_rows(rows: &[MappingRow]) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut mappings = Vec::with_capacity(rows.len());

        for (i, row) in rows.iter().enumerate() {
            let project = row.project.trim();
            let prefix = normalize_prefix(&row.prefix);
            let base_url = normalize_base(&row.base_url);

            if project.is_empty() && prefix.is_empty() && base_url.is_empty() {
                continue;
            }
            if prefix.is_empty() || base_url.is_empty() {
                return Err(Error::IncompleteMapping { row: i + 1 });
            }
            if !is_valid_prefix(&prefix) {
                return Err(Error::InvalidPrefix(row.prefix.trim().to_string()));
            }
            if !is_absolute_url(&base_url) {
                return Err(Error::InvalidBaseUrl(row.base_url.trim().to_string()));
            }
            if !seen.insert(prefix.clone()) {
                return Err(Error::DuplicatePrefix(prefix));
            }

            mappings.push(Mapping {
                project: (!project.is_empty()).then(|| project.to_string()),
                prefix,
                base_url,
            });
        }

        Ok(MappingSet { mappings })
    }

    /// Builds a set from previously stored records without rejecting
    /// anything: entries missing a prefix or URL are skipped, fields are
    /// normalized, and the first record for a prefix wins.
    pub fn from_stored(stored: Vec<Mapping>) -> Self {
        let mut seen = HashSet::new();
        let mappings = stored
            .into_iter()
            .filter_map(|m| {
                let prefix = normalize_prefix(&m.prefix);
                let base_url = normalize_base(&m.base_url);
                if prefix.is_empty() || base_url.is_empty() || !seen.insert(prefix.clone()) {
                    return None;
                }
                Some(Mapping {
                    project: m.project.filter(|p| !p.trim().is_empty()),
                    prefix,
                    base_url,
                })
            })
            .collect();
        MappingSet { mappings }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mapping> {
        self.mappings.iter()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn as_slice(&self) -> &[Mapping] {
        &self.mappings
    }

    /// Looks up a prefix case-insensitively.
    pub fn find(&self, prefix: &str) -> Option<&Mapping> {
        let wanted = normalize_prefix(prefix);
        self.mappings.iter().find(|m| m.prefix == wanted)
    }

    /// Base URL for `key`, or `None` when the key has no prefix or the
    /// prefix is not configured.
    pub fn base_url_for_key(&self, key: &str) -> Option<&str> {
        let prefix = extract_prefix(key)?;
        self.find(prefix).map(|m| m.base_url.as_str())
    }

    /// Returns a new set with `row` appended.
    ///
    /// Only the new row is validated; existing mappings are kept as loaded,
    /// and the new prefix must not already be configured.
    pub fn with_added(&self, row: MappingRow) -> Result<Self> {
        let added = MappingSet::from_rows(std::slice::from_ref(&row))?
            .mappings
            .pop()
            .ok_or(Error::IncompleteMapping { row: 1 })?;
        if self.find(&added.prefix).is_some() {
            return Err(Error::DuplicatePrefix(added.prefix));
        }
        let mut mappings = self.mappings.clone();
        mappings.push(added);
        Ok(MappingSet { mappings })
    }

    /// Returns a new set without `prefix`, and whether anything was removed.
    pub fn without(&self, prefix: &str) -> (Self, bool) {
        let wanted = normalize_prefix(prefix);
        let mappings: Vec<Mapping> = self
            .mappings
            .iter()
            .filter(|m| m.prefix != wanted)
            .cloned()
            .collect();
        let removed = mappings.len() != self.mappings.len();
        (MappingSet { mappings }, removed)
    }
}

fn is_absolute_url(url: &str) -> bool {
    match url.split_once("://") {
        Some((scheme, rest)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
                && !rest.trim_end_matches('/').is_empty()
        }
        None => false,
    }
}

/// Reads and writes the configured mapping set.
pub struct MappingResolver<'a> {
    store: &'a dyn Store,
}

impl<'a> MappingResolver<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        MappingResolver { store }
    }

    /// Loads the current mapping set.
    pub fn load(&self) -> Result<MappingSet> {
        let stored: Vec<Mapping> = self.store.load_or(Scope::Sync, keys::MAPPINGS, Vec::new())?;
        Ok(MappingSet::from_stored(stored))
    }

    /// Validates `rows` and replaces the stored mapping set. Nothing is
    /// written when validation fails.
    pub fn save_rows(&self, rows: &[MappingRow]) -> Result<MappingSet> {
        let set = MappingSet::from_rows(rows)?;
        self.save(&set)?;
        Ok(set)
    }

    /// Replaces the stored mapping set.
    pub fn save(&self, set: &MappingSet) -> Result<()> {
        self.store.save(Scope::Sync, keys::MAPPINGS, &set.mappings)
    }

    /// Base URL configured for `key`'s prefix.
    pub fn get_base_url_for_key(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.base_url_for_key(key).map(str::to_string))
    }
}

#[cfg(test)]
#[path = "mapping_tests.rs"]
mod tests;
