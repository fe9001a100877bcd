// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recently opened issues and the lifetime counter.
//!
//! The [`HistoryLedger`] is a bounded list with at most one item per issue
//! key. Pinned items sort ahead of unpinned ones; within each group the most
//! recently accessed comes first. When the list grows past
//! [`MAX_HISTORY_ITEMS`] the tail is dropped, so unpinned items are evicted
//! before pinned ones.
//!
//! The lifetime counter lives in its own store entry and is never reset by
//! ledger changes.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::clock::ClockSource;
use crate::error::Result;
use crate::key::IssueKey;
use crate::store::{keys, Scope, Store, StoreExt};

/// Maximum number of items the ledger keeps.
pub const MAX_HISTORY_ITEMS: usize = 20;

/// One remembered issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub key: IssueKey,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub last_access_ts: i64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub pinned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl HistoryItem {
    /// Returns true when a non-empty title is present.
    pub fn has_title(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// A single access to record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRecord {
    pub key: IssueKey,
    pub url: String,
    pub title: Option<String>,
}

/// The bounded, ordered access ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLedger {
    /// Cumulative number of recorded accesses (can exceed `items.len()`).
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub items: Vec<HistoryItem>,
}

impl HistoryLedger {
    pub fn get(&self, key: &IssueKey) -> Option<&HistoryItem> {
        self.items.iter().find(|i| &i.key == key)
    }

    fn get_mut(&mut self, key: &IssueKey) -> Option<&mut HistoryItem> {
        self.items.iter_mut().find(|i| &i.key == key)
    }

    /// Records one access at `now_ms`.
    ///
    /// An existing item is updated in place: its timestamp always moves to
    /// `now_ms`, its URL is replaced by a non-empty `url`, and its title is
    /// filled only if it had none. A new item goes to the head. The ledger is
    /// then re-ordered and pruned.
    pub fn record(&mut self, record: SearchRecord, now_ms: i64) {
        self.count += 1;
        let title = record.title.filter(|t| !t.is_empty());

        match self.get_mut(&record.key) {
            Some(item) => {
                item.last_access_ts = now_ms;
                if !item.has_title() {
                    if let Some(title) = title {
                        item.title = Some(title);
                    }
                }
                if !record.url.is_empty() {
                    item.url = record.url;
                }
            }
            None => self.items.insert(
                0,
                HistoryItem {
                    key: record.key,
                    url: record.url,
                    title,
                    last_access_ts: now_ms,
                    pinned: false,
                    note: None,
                },
            ),
        }

        self.reorder();
    }

    /// Sets the title of `key` if it has none. Returns true if it changed.
    pub fn update_title(&mut self, key: &IssueKey, title: &str) -> bool {
        if title.is_empty() {
            return false;
        }
        match self.get_mut(key) {
            Some(item) if !item.has_title() => {
                item.title = Some(title.to_string());
                true
            }
            _ => false,
        }
    }

    /// Removes `key`. Returns true if it was present.
    pub fn remove(&mut self, key: &IssueKey) -> bool {
        let before = self.items.len();
        self.items.retain(|i| &i.key != key);
        self.items.len() != before
    }

    /// Pins or unpins `key`. Returns true if the item exists.
    pub fn set_pinned(&mut self, key: &IssueKey, pinned: bool) -> bool {
        match self.get_mut(key) {
            Some(item) => {
                item.pinned = pinned;
                self.reorder();
                true
            }
            None => false,
        }
    }

    /// Sets or clears the note on `key`. Returns true if the item exists.
    pub fn set_note(&mut self, key: &IssueKey, note: Option<String>) -> bool {
        match self.get_mut(key) {
            Some(item) => {
                item.note = note.filter(|n| !n.trim().is_empty());
                true
            }
            None => false,
        }
    }

    /// Sorts pinned-first then newest-first, and truncates to
    /// [`MAX_HISTORY_ITEMS`]. The sort is stable, so equal timestamps keep
    /// their current relative order.
    pub fn reorder(&mut self) {
        self.items
            .sort_by_key(|i| (Reverse(i.pinned), Reverse(i.last_access_ts)));
        self.items.truncate(MAX_HISTORY_ITEMS);
    }
}

/// Store-backed ledger and lifetime counter operations.
///
/// Every mutation loads the ledger, changes it, and writes it back. A failed
/// read or write is returned to the caller and nothing is retried.
pub struct History<'a> {
    store: &'a dyn Store,
    clock: &'a dyn ClockSource,
}

impl<'a> History<'a> {
    pub fn new(store: &'a dyn Store, clock: &'a dyn ClockSource) -> Self {
        History { store, clock }
    }

    pub fn load(&self) -> Result<HistoryLedger> {
        let mut ledger: HistoryLedger =
            self.store
                .load_or(Scope::Sync, keys::HISTORY, HistoryLedger::default())?;
        // Older writers may have left more than the cap or an unsorted list.
        ledger.reorder();
        Ok(ledger)
    }

    fn save(&self, ledger: &HistoryLedger) -> Result<()> {
        self.store.save(Scope::Sync, keys::HISTORY, ledger)
    }

    /// Load, apply `f`, and write back only if `f` reports a change.
    fn mutate(&self, f: impl FnOnce(&mut HistoryLedger) -> bool) -> Result<bool> {
        let mut ledger = self.load()?;
        let changed = f(&mut ledger);
        if changed {
            self.save(&ledger)?;
        }
        Ok(changed)
    }

    pub fn record_search(&self, record: SearchRecord) -> Result<()> {
        let now = self.clock.now_ms();
        tracing::debug!(key = %record.key, "recording search");
        self.mutate(|ledger| {
            ledger.record(record, now);
            true
        })?;
        Ok(())
    }

    /// Fills the title of `key` if it has none. Returns true if it was set.
    pub fn update_title(&self, key: &IssueKey, title: &str) -> Result<bool> {
        self.mutate(|ledger| ledger.update_title(key, title))
    }

    /// Deletes `key`. Deleting an absent key succeeds and returns false.
    pub fn delete_item(&self, key: &IssueKey) -> Result<bool> {
        self.mutate(|ledger| ledger.remove(key))
    }

    pub fn set_pinned(&self, key: &IssueKey, pinned: bool) -> Result<bool> {
        self.mutate(|ledger| ledger.set_pinned(key, pinned))
    }

    pub fn set_note(&self, key: &IssueKey, note: Option<String>) -> Result<bool> {
        self.mutate(|ledger| ledger.set_note(key, note))
    }

    /// Resets the ledger to empty. The lifetime counter is untouched.
    pub fn clear(&self) -> Result<()> {
        self.save(&HistoryLedger::default())
    }

    pub fn inc_lifetime(&self, n: u64) -> Result<u64> {
        let next = self.get_lifetime_count()?.saturating_add(n);
        self.store.save(Scope::Local, keys::LIFETIME, &next)?;
        Ok(next)
    }

    pub fn get_lifetime_count(&self) -> Result<u64> {
        self.store.load_or(Scope::Local, keys::LIFETIME, 0u64)
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
