// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Opening batches of issue keys.
//!
//! [`Dispatcher::dispatch`] walks keys in input order. Each key is resolved
//! against the mapping set; a resolved key is opened, counted, and recorded
//! before the next key starts. Keys without a mapping are collected and
//! reported in one combined notice at the end.
//!
//! Titles arrive later through [`Dispatcher::on_page_loaded`], matched to
//! their key through the pending-title table.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::clock::ClockSource;
use crate::error::{Error, Result};
use crate::history::{History, SearchRecord};
use crate::key::{parse_keys, IssueKey};
use crate::mapping::{MappingResolver, MappingSet};
use crate::store::Store;

/// Maximum number of suggestions produced for quick-entry previews.
pub const MAX_SUGGESTIONS: usize = 5;

/// Opaque handle for an opened page.
pub type TabId = u64;

/// Opens URLs.
pub trait Navigator {
    fn open_in_new_tab(&self, url: &str) -> Result<TabId>;
}

/// Shows user-facing notices.
pub trait Notifier {
    fn show(&self, notice: &Notice) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Normal,
    High,
}

impl Priority {
    pub fn as_i32(&self) -> i32 {
        match self {
            Priority::Low => 0,
            Priority::Normal => 1,
            Priority::High => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub message: String,
    pub priority: Priority,
}

impl Notice {
    /// The single notice listing every unresolved key of one dispatch.
    pub fn missing_mapping(unresolved: &[String], now_ms: i64) -> Self {
        Notice {
            id: format!("missing-config-{now_ms}"),
            title: "Missing prefix mapping".to_string(),
            message: format!("Add mapping for: {}", unresolved.join(", ")),
            priority: Priority::Normal,
        }
    }

    pub fn no_keys(now_ms: i64) -> Self {
        Notice {
            id: format!("no-keys-{now_ms}"),
            title: "No issue keys found".to_string(),
            message: "Select text like ABC-1234 (you can select many, separated by commas)."
                .to_string(),
            priority: Priority::Low,
        }
    }
}

/// A key that resolved but could not be opened or recorded.
#[derive(Debug)]
pub struct KeyFailure {
    pub key: IssueKey,
    pub error: Error,
}

/// Result of one dispatch call.
#[derive(Debug, Default)]
pub struct DispatchOutcome {
    /// Keys that were opened and recorded, in input order.
    pub opened: Vec<IssueKey>,
    /// Keys with no configured mapping (uppercased as given).
    pub unresolved: Vec<String>,
    /// Resolved keys whose navigation or recording failed.
    pub failures: Vec<KeyFailure>,
    /// Error from showing the notice, if one was needed and failed.
    pub notice_error: Option<Error>,
}

impl DispatchOutcome {
    /// True when nothing was attempted (no keys in the input).
    pub fn is_empty(&self) -> bool {
        self.opened.is_empty() && self.unresolved.is_empty() && self.failures.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingTitle {
    key: IssueKey,
    url: String,
}

/// Coordinates mapping resolution, navigation, and history recording.
pub struct Dispatcher<'a> {
    store: &'a dyn Store,
    clock: &'a dyn ClockSource,
    navigator: &'a dyn Navigator,
    notifier: &'a dyn Notifier,
    pending: HashMap<TabId, PendingTitle>,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        store: &'a dyn Store,
        clock: &'a dyn ClockSource,
        navigator: &'a dyn Navigator,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Dispatcher {
            store,
            clock,
            navigator,
            notifier,
            pending: HashMap::new(),
        }
    }

    fn history(&self) -> History<'a> {
        History::new(self.store, self.clock)
    }

    /// Parses `text` and dispatches every key found. When the text holds no
    /// keys a "no keys found" notice is shown and nothing is opened.
    pub fn open_text(&mut self, text: &str) -> Result<DispatchOutcome> {
        let keys: Vec<String> = parse_keys(text).into_iter().map(String::from).collect();
        if keys.is_empty() {
            let mut outcome = DispatchOutcome::default();
            if let Err(e) = self.notifier.show(&Notice::no_keys(self.clock.now_ms())) {
                tracing::warn!("failed to show notice: {}", e);
                outcome.notice_error = Some(e);
            }
            return Ok(outcome);
        }
        self.dispatch(&keys)
    }

    /// Resolves, opens, and records each key in order.
    ///
    /// Failing to load the mapping set aborts before any key is attempted.
    /// After that every key is attempted: a navigation or store failure on
    /// one key lands in [`DispatchOutcome::failures`] and the batch goes on.
    pub fn dispatch<K: AsRef<str>>(&mut self, raw_keys: &[K]) -> Result<DispatchOutcome> {
        let mappings = MappingResolver::new(self.store).load()?;
        let mut outcome = DispatchOutcome::default();
        tracing::info!(count = raw_keys.len(), "dispatching keys");

        for raw in raw_keys {
            let upper = raw.as_ref().trim().to_uppercase();
            let resolved = IssueKey::parse(&upper)
                .ok()
                .and_then(|key| mappings.base_url_for_key(key.as_str()).map(|b| (key, b)));

            let Some((key, base)) = resolved else {
                tracing::debug!(key = %upper, "no mapping");
                outcome.unresolved.push(upper);
                continue;
            };

            let url = format!("{base}{key}");
            match self.open_and_record(&key, &url) {
                Ok(()) => outcome.opened.push(key),
                Err(error) => {
                    tracing::warn!(key = %key, "dispatch failed: {}", error);
                    outcome.failures.push(KeyFailure { key, error });
                }
            }
        }

        if !outcome.unresolved.is_empty() {
            let notice = Notice::missing_mapping(&outcome.unresolved, self.clock.now_ms());
            if let Err(e) = self.notifier.show(&notice) {
                tracing::warn!("failed to show notice: {}", e);
                outcome.notice_error = Some(e);
            }
        }

        tracing::info!(
            opened = outcome.opened.len(),
            unresolved = outcome.unresolved.len(),
            failed = outcome.failures.len(),
            "dispatch finished"
        );
        Ok(outcome)
    }

    fn open_and_record(&mut self, key: &IssueKey, url: &str) -> Result<()> {
        let tab = self.navigator.open_in_new_tab(url)?;
        let history = self.history();
        history.record_search(SearchRecord {
            key: key.clone(),
            url: url.to_string(),
            title: None,
        })?;
        history.inc_lifetime(1)?;
        self.pending.insert(
            tab,
            PendingTitle {
                key: key.clone(),
                url: url.to_string(),
            },
        );
        Ok(())
    }

    /// Called when an opened tab finishes loading. Consumes the pending
    /// entry and fills the item's title if it has none. Returns true when a
    /// title was written.
    pub fn on_page_loaded(&mut self, tab: TabId, title: &str) -> Result<bool> {
        let Some(pending) = self.pending.remove(&tab) else {
            return Ok(false);
        };
        if title.is_empty() {
            return Ok(false);
        }
        tracing::debug!(key = %pending.key, url = %pending.url, "page loaded");
        self.history().update_title(&pending.key, title)
    }

    /// Called when a tab closes before loading; forgets its pending entry.
    pub fn on_tab_closed(&mut self, tab: TabId) {
        self.pending.remove(&tab);
    }

    /// Number of tabs still waiting for a title.
    pub fn pending_titles(&self) -> usize {
        self.pending.len()
    }
}

/// A side-effect-free preview of what opening a key would do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub key: IssueKey,
    /// Where the key would open, or `None` when no mapping is configured.
    pub url: Option<String>,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.url {
            Some(url) => write!(f, "Open {} at {}", self.key, url),
            None => write!(f, "{}: no mapping configured", self.key),
        }
    }
}

/// Previews the keys in `text`: deduplicated in first-seen order, capped at
/// [`MAX_SUGGESTIONS`], resolved without touching history or navigation.
pub fn suggest(mappings: &MappingSet, text: &str) -> Vec<Suggestion> {
    let mut seen = HashSet::new();
    parse_keys(text)
        .into_iter()
        .filter(|k| seen.insert(k.clone()))
        .take(MAX_SUGGESTIONS)
        .map(|key| {
            let url = mappings
                .base_url_for_key(key.as_str())
                .map(|base| format!("{base}{key}"));
            Suggestion { key, url }
        })
        .collect()
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
