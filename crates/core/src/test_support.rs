// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(dead_code)]

//! Shared fakes for unit tests: a controllable clock, a store that can be
//! told to fail, and recording navigator/notifier/timer collaborators.

use std::cell::{Cell, RefCell};
use std::sync::atomic::{AtomicI64, Ordering};

use serde_json::{Map, Value};

use crate::clock::ClockSource;
use crate::dispatch::{Navigator, Notice, Notifier, TabId};
use crate::error::{Error, Result};
use crate::reminder::Timer;
use crate::store::{MemoryStore, Scope, Store};

/// Mock clock for testing with controllable time.
pub struct MockClock {
    time_ms: AtomicI64,
}

impl MockClock {
    pub fn new(initial_ms: i64) -> Self {
        MockClock {
            time_ms: AtomicI64::new(initial_ms),
        }
    }

    pub fn set(&self, ms: i64) {
        self.time_ms.store(ms, Ordering::SeqCst);
    }

    pub fn advance(&self, ms: i64) {
        self.time_ms.fetch_add(ms, Ordering::SeqCst);
    }
}

impl ClockSource for MockClock {
    fn now_ms(&self) -> i64 {
        self.time_ms.load(Ordering::SeqCst)
    }
}

/// A memory store whose reads or writes can be switched to fail, either
/// entirely or only for writes touching one storage key.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_reads: Cell<bool>,
    pub fail_writes: Cell<bool>,
    pub refuse_key: Cell<Option<&'static str>>,
}

impl Store for FlakyStore {
    fn get(&self, scope: Scope, keys: &[&str]) -> Result<Map<String, Value>> {
        if self.fail_reads.get() {
            return Err(Error::Storage("read refused".into()));
        }
        self.inner.get(scope, keys)
    }

    fn set(&self, scope: Scope, items: Map<String, Value>) -> Result<()> {
        let refused = self
            .refuse_key
            .get()
            .is_some_and(|key| items.contains_key(key));
        if self.fail_writes.get() || refused {
            return Err(Error::Storage("write refused".into()));
        }
        self.inner.set(scope, items)
    }

    fn remove(&self, scope: Scope, keys: &[&str]) -> Result<()> {
        if self.fail_writes.get() {
            return Err(Error::Storage("write refused".into()));
        }
        self.inner.remove(scope, keys)
    }

    fn keys(&self, scope: Scope) -> Result<Vec<String>> {
        if self.fail_reads.get() {
            return Err(Error::Storage("read refused".into()));
        }
        self.inner.keys(scope)
    }
}

/// Navigator that records every URL and hands out sequential tab ids.
/// URLs containing `fail_on` are refused.
#[derive(Default)]
pub struct RecordingNavigator {
    pub opened: RefCell<Vec<String>>,
    pub fail_on: Option<String>,
}

impl RecordingNavigator {
    pub fn failing_on(fragment: &str) -> Self {
        RecordingNavigator {
            opened: RefCell::new(Vec::new()),
            fail_on: Some(fragment.to_string()),
        }
    }

    pub fn urls(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn open_in_new_tab(&self, url: &str) -> Result<TabId> {
        if let Some(fragment) = &self.fail_on {
            if url.contains(fragment.as_str()) {
                return Err(Error::Navigation {
                    url: url.to_string(),
                    reason: "refused".into(),
                });
            }
        }
        let mut opened = self.opened.borrow_mut();
        opened.push(url.to_string());
        Ok(opened.len() as TabId)
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: RefCell<Vec<Notice>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, notice: &Notice) -> Result<()> {
        if self.fail {
            return Err(Error::Notification("display refused".into()));
        }
        self.notices.borrow_mut().push(notice.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerCall {
    ArmAt(String, i64),
    ArmAfter(String, u32),
    Cancel(String),
}

#[derive(Default)]
pub struct RecordingTimer {
    pub calls: RefCell<Vec<TimerCall>>,
}

impl RecordingTimer {
    pub fn calls(&self) -> Vec<TimerCall> {
        self.calls.borrow().clone()
    }
}

impl Timer for RecordingTimer {
    fn arm_at(&self, name: &str, fire_at_ms: i64) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(TimerCall::ArmAt(name.to_string(), fire_at_ms));
        Ok(())
    }

    fn arm_after_delay(&self, name: &str, minutes: u32) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(TimerCall::ArmAfter(name.to_string(), minutes));
        Ok(())
    }

    fn cancel(&self, name: &str) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(TimerCall::Cancel(name.to_string()));
        Ok(())
    }
}
