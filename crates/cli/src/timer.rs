// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persistent one-shot timers.
//!
//! A process that exits cannot keep a timer running, so armed timers are
//! written to the local store as `timer-<name>` with their due time. A later
//! `qf remind tick` collects the due ones and fires them.

use qf_core::clock::MINUTE_MS;
use qf_core::{ClockSource, Scope, Store, StoreExt, Timer};

pub const TIMER_PREFIX: &str = "timer-";

/// A timer waiting to fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmedTimer {
    pub name: String,
    pub fire_at_ms: i64,
}

pub struct StoreTimer<'a> {
    store: &'a dyn Store,
    clock: &'a dyn ClockSource,
}

impl<'a> StoreTimer<'a> {
    pub fn new(store: &'a dyn Store, clock: &'a dyn ClockSource) -> Self {
        StoreTimer { store, clock }
    }

    /// Every armed timer, soonest first.
    pub fn armed(&self) -> qf_core::Result<Vec<ArmedTimer>> {
        let mut timers = Vec::new();
        for entry in self.store.keys(Scope::Local)? {
            let Some(name) = entry.strip_prefix(TIMER_PREFIX) else {
                continue;
            };
            if let Some(fire_at_ms) = self.store.load::<i64>(Scope::Local, &entry)? {
                timers.push(ArmedTimer {
                    name: name.to_string(),
                    fire_at_ms,
                });
            }
        }
        timers.sort_by(|a, b| a.fire_at_ms.cmp(&b.fire_at_ms).then(a.name.cmp(&b.name)));
        Ok(timers)
    }

    /// Timers due at or before `now_ms`.
    pub fn due(&self, now_ms: i64) -> qf_core::Result<Vec<ArmedTimer>> {
        Ok(self
            .armed()?
            .into_iter()
            .filter(|t| t.fire_at_ms <= now_ms)
            .collect())
    }
}

fn entry_key(name: &str) -> String {
    format!("{TIMER_PREFIX}{name}")
}

impl Timer for StoreTimer<'_> {
    fn arm_at(&self, name: &str, fire_at_ms: i64) -> qf_core::Result<()> {
        self.store.save(Scope::Local, &entry_key(name), &fire_at_ms)
    }

    fn arm_after_delay(&self, name: &str, minutes: u32) -> qf_core::Result<()> {
        let fire_at = self.clock.now_ms() + i64::from(minutes) * MINUTE_MS;
        self.arm_at(name, fire_at)
    }

    fn cancel(&self, name: &str) -> qf_core::Result<()> {
        self.store.remove(Scope::Local, &[&entry_key(name)])
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
