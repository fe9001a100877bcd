// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::store::MemoryStore;
use crate::test_support::{FlakyStore, MockClock};
use serde_json::json;

fn key(s: &str) -> IssueKey {
    IssueKey::parse(s).unwrap()
}

fn rec(k: &str, url: &str, title: Option<&str>) -> SearchRecord {
    SearchRecord {
        key: key(k),
        url: url.to_string(),
        title: title.map(str::to_string),
    }
}

fn keys_of(ledger: &HistoryLedger) -> Vec<&str> {
    ledger.items.iter().map(|i| i.key.as_str()).collect()
}

#[test]
fn record_inserts_new_item_at_head() {
    let mut ledger = HistoryLedger::default();
    ledger.record(rec("ABC-1", "https://x/ABC-1", None), 100);
    ledger.record(rec("ABC-2", "https://x/ABC-2", None), 200);
    assert_eq!(keys_of(&ledger), vec!["ABC-2", "ABC-1"]);
    assert_eq!(ledger.count, 2);
    assert!(ledger.items[0].title.is_none());
}

#[test]
fn record_updates_existing_in_place() {
    let mut ledger = HistoryLedger::default();
    ledger.record(rec("ABC-1", "https://old/ABC-1", None), 100);
    ledger.record(rec("ABC-2", "https://x/ABC-2", None), 200);
    ledger.record(rec("ABC-1", "https://new/ABC-1", Some("Title")), 300);

    assert_eq!(keys_of(&ledger), vec!["ABC-1", "ABC-2"]);
    assert_eq!(ledger.count, 3);
    let item = ledger.get(&key("ABC-1")).unwrap();
    assert_eq!(item.url, "https://new/ABC-1");
    assert_eq!(item.title.as_deref(), Some("Title"));
    assert_eq!(item.last_access_ts, 300);
}

#[test]
fn record_keeps_existing_title_and_url_when_empty() {
    let mut ledger = HistoryLedger::default();
    ledger.record(rec("ABC-1", "https://x/ABC-1", Some("First")), 100);
    ledger.record(rec("ABC-1", "", Some("Second")), 200);
    let item = ledger.get(&key("ABC-1")).unwrap();
    assert_eq!(item.title.as_deref(), Some("First"));
    assert_eq!(item.url, "https://x/ABC-1");
}

#[test]
fn record_twice_at_same_time_is_idempotent_for_items() {
    let mut ledger = HistoryLedger::default();
    ledger.record(rec("ABC-1", "https://x/ABC-1", Some("T")), 500);
    let items_before = ledger.items.clone();
    ledger.record(rec("ABC-1", "https://x/ABC-1", Some("T")), 500);
    assert_eq!(ledger.items, items_before);
}

#[test]
fn ledger_is_capped_at_twenty() {
    let mut ledger = HistoryLedger::default();
    for i in 0..35 {
        ledger.record(rec(&format!("KEY-{i}"), "u", None), i);
        assert!(ledger.items.len() <= MAX_HISTORY_ITEMS);
    }
    assert_eq!(ledger.items.len(), MAX_HISTORY_ITEMS);
    assert_eq!(ledger.count, 35);
    assert_eq!(ledger.items[0].key.as_str(), "KEY-34");
    assert_eq!(ledger.items[19].key.as_str(), "KEY-15");
}

#[test]
fn pinned_items_survive_pruning() {
    let mut ledger = HistoryLedger::default();
    ledger.record(rec("OLD-1", "u", None), 1);
    ledger.record(rec("OLD-2", "u", None), 2);
    assert!(ledger.set_pinned(&key("OLD-1"), true));

    for i in 0..30 {
        ledger.record(rec(&format!("NEW-{i}"), "u", None), 100 + i);
    }

    assert_eq!(ledger.items.len(), MAX_HISTORY_ITEMS);
    assert!(ledger.get(&key("OLD-1")).is_some());
    assert!(ledger.get(&key("OLD-2")).is_none());
    assert_eq!(ledger.items[0].key.as_str(), "OLD-1");
    assert_eq!(ledger.items[1].key.as_str(), "NEW-29");
}

#[test]
fn ordering_within_groups_is_newest_first() {
    let mut ledger = HistoryLedger::default();
    for (k, ts) in [("AA-1", 10), ("BB-1", 30), ("CC-1", 20), ("DD-1", 40)] {
        ledger.record(rec(k, "u", None), ts);
    }
    ledger.set_pinned(&key("CC-1"), true);
    ledger.set_pinned(&key("AA-1"), true);
    assert_eq!(keys_of(&ledger), vec!["CC-1", "AA-1", "DD-1", "BB-1"]);

    ledger.set_pinned(&key("CC-1"), false);
    assert_eq!(keys_of(&ledger), vec!["AA-1", "DD-1", "BB-1", "CC-1"]);
}

#[test]
fn update_title_only_fills_empty_titles() {
    let mut ledger = HistoryLedger::default();
    ledger.record(rec("ABC-1", "u", None), 1);
    ledger.record(rec("ABC-2", "u", Some("Kept")), 2);

    assert!(ledger.update_title(&key("ABC-1"), "Filled"));
    assert!(!ledger.update_title(&key("ABC-1"), "Again"));
    assert!(!ledger.update_title(&key("ABC-2"), "Overwrite"));
    assert!(!ledger.update_title(&key("ABC-9"), "Missing"));
    assert!(!ledger.update_title(&key("ABC-1"), ""));

    assert_eq!(ledger.get(&key("ABC-1")).unwrap().title.as_deref(), Some("Filled"));
    assert_eq!(ledger.get(&key("ABC-2")).unwrap().title.as_deref(), Some("Kept"));
}

#[test]
fn update_title_does_not_touch_timestamp_or_order() {
    let mut ledger = HistoryLedger::default();
    ledger.record(rec("ABC-1", "u", None), 1);
    ledger.record(rec("ABC-2", "u", None), 2);
    ledger.update_title(&key("ABC-1"), "T");
    assert_eq!(keys_of(&ledger), vec!["ABC-2", "ABC-1"]);
    assert_eq!(ledger.get(&key("ABC-1")).unwrap().last_access_ts, 1);
}

#[test]
fn remove_and_note_are_noops_when_absent() {
    let mut ledger = HistoryLedger::default();
    ledger.record(rec("ABC-1", "u", None), 1);
    assert!(!ledger.remove(&key("ZZ-1")));
    assert!(!ledger.set_note(&key("ZZ-1"), Some("n".into())));
    assert!(!ledger.set_pinned(&key("ZZ-1"), true));
    assert!(ledger.set_note(&key("ABC-1"), Some("remember".into())));
    assert_eq!(ledger.items[0].note.as_deref(), Some("remember"));
    assert!(ledger.set_note(&key("ABC-1"), Some("  ".into())));
    assert!(ledger.items[0].note.is_none());
    assert!(ledger.remove(&key("ABC-1")));
    assert!(ledger.items.is_empty());
}

#[test]
fn ledger_reads_legacy_json() {
    let ledger: HistoryLedger = serde_json::from_value(json!({
        "count": 3,
        "items": [{ "key": "ABC-1", "url": "https://x/ABC-1", "title": "", "lastAccessTs": 5 }]
    }))
    .unwrap();
    assert_eq!(ledger.count, 3);
    assert!(!ledger.items[0].has_title());
    assert!(!ledger.items[0].pinned);
}

#[test]
fn history_persists_through_store() {
    let store = MemoryStore::new();
    let clock = MockClock::new(1_000);
    let history = History::new(&store, &clock);

    history.record_search(rec("ABC-1", "https://x/ABC-1", None)).unwrap();
    clock.advance(10);
    history.record_search(rec("ABC-1", "https://x/ABC-1", None)).unwrap();

    let ledger = history.load().unwrap();
    assert_eq!(ledger.count, 2);
    assert_eq!(ledger.items.len(), 1);
    assert_eq!(ledger.items[0].last_access_ts, 1_010);

    assert!(history.update_title(&key("ABC-1"), "Title").unwrap());
    assert!(history.set_pinned(&key("ABC-1"), true).unwrap());
    assert!(history.set_note(&key("ABC-1"), Some("n".into())).unwrap());
    let item = history.load().unwrap().items[0].clone();
    assert_eq!(item.title.as_deref(), Some("Title"));
    assert!(item.pinned);
    assert_eq!(item.note.as_deref(), Some("n"));

    assert!(history.delete_item(&key("ABC-1")).unwrap());
    assert!(!history.delete_item(&key("ABC-1")).unwrap());
    assert_eq!(history.load().unwrap().count, 2);
}

#[test]
fn clear_keeps_lifetime_counter() {
    let store = MemoryStore::new();
    let clock = MockClock::new(0);
    let history = History::new(&store, &clock);
    history.record_search(rec("ABC-1", "u", None)).unwrap();
    history.inc_lifetime(1).unwrap();

    history.clear().unwrap();
    assert_eq!(history.load().unwrap(), HistoryLedger::default());
    assert_eq!(history.get_lifetime_count().unwrap(), 1);
}

#[test]
fn lifetime_counter_is_independent_of_pruning() {
    let store = MemoryStore::new();
    let clock = MockClock::new(0);
    let history = History::new(&store, &clock);
    for i in 0..25 {
        history.record_search(rec(&format!("KEY-{i}"), "u", None)).unwrap();
        history.inc_lifetime(1).unwrap();
        clock.advance(1);
    }
    assert_eq!(history.load().unwrap().items.len(), MAX_HISTORY_ITEMS);
    assert_eq!(history.get_lifetime_count().unwrap(), 25);
    assert_eq!(history.inc_lifetime(5).unwrap(), 30);
}

#[test]
fn write_failure_is_reported_and_not_applied() {
    let store = FlakyStore::default();
    let clock = MockClock::new(0);
    let history = History::new(&store, &clock);
    history.record_search(rec("ABC-1", "u", None)).unwrap();

    store.fail_writes.set(true);
    let err = history.record_search(rec("ABC-2", "u", None)).unwrap_err();
    assert!(err.is_persistence());
    assert!(history.inc_lifetime(1).is_err());

    store.fail_writes.set(false);
    let ledger = history.load().unwrap();
    assert_eq!(keys_of(&ledger), vec!["ABC-1"]);
    assert_eq!(ledger.count, 1);
    assert_eq!(history.get_lifetime_count().unwrap(), 0);
}

#[test]
fn unchanged_mutations_skip_the_write() {
    let store = FlakyStore::default();
    let clock = MockClock::new(0);
    let history = History::new(&store, &clock);
    history.record_search(rec("ABC-1", "u", Some("T"))).unwrap();

    store.fail_writes.set(true);
    // Nothing to change, so no write is attempted.
    assert!(!history.update_title(&key("ABC-1"), "Other").unwrap());
    assert!(!history.delete_item(&key("ZZ-1")).unwrap());
}
