// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! qf-core: issue-key recognition and navigation bookkeeping.
//!
//! This crate holds everything the `qf` host needs that is independent of
//! how text is captured or how URLs are shown:
//!
//! - [`key`] extracts and normalizes issue keys such as `ABC-123`
//! - [`mapping`] binds key prefixes to tracker base URLs
//! - [`history`] keeps the bounded recency ledger and the lifetime counter
//! - [`dispatch`] resolves, opens, and records batches of keys
//! - [`reminder`] schedules repeatable reminder notifications
//! - [`settings`] stores theme and smart-link preferences and config snapshots
//! - [`store`] is the persistent key-value abstraction everything reads from
//!
//! Collaborators (store, clock, navigator, notifier, timer) are injected as
//! trait objects so hosts and tests can supply their own.

pub mod clock;
pub mod dispatch;
pub mod error;
pub mod history;
pub mod key;
pub mod mapping;
pub mod reminder;
pub mod settings;
pub mod store;

#[cfg(test)]
mod test_support;

pub use clock::{ClockSource, SystemClock};
pub use dispatch::{
    suggest, DispatchOutcome, Dispatcher, KeyFailure, Navigator, Notice, Notifier, Priority,
    Suggestion, TabId,
};
pub use error::{Error, Result};
pub use history::{History, HistoryItem, HistoryLedger, SearchRecord};
pub use key::{extract_prefix, normalize_base, normalize_prefix, parse_keys, IssueKey};
pub use mapping::{Mapping, MappingResolver, MappingRow, MappingSet};
pub use reminder::{FireOutcome, ReminderAlarm, ReminderRequest, Reminders, Timer};
pub use settings::{ConfigSnapshot, Settings, Theme};
pub use store::{MemoryStore, Scope, SqliteStore, Store, StoreExt};
