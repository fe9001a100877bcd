// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reminder alarms tied to issue keys.
//!
//! Lifecycle: `schedule` persists an alarm and arms a timer. When the timer
//! fires a notice is shown; an alarm with repeats left is decremented and
//! re-armed one minute later, otherwise it is deleted. `clear` cancels and
//! deletes in any state.

use serde::{Deserialize, Serialize};

use crate::clock::{ClockSource, MINUTE_MS};
use crate::dispatch::{Notice, Notifier, Priority};
use crate::error::Result;
use crate::key::IssueKey;
use crate::store::{keys, Scope, Store, StoreExt};

/// Delay before a repeating reminder fires again.
pub const REPEAT_INTERVAL_MINUTES: u32 = 1;

/// Prefix of reminder notice ids.
pub const NOTICE_PREFIX: &str = "issue-alarm-";

/// Arms and cancels named timers.
pub trait Timer {
    fn arm_at(&self, name: &str, fire_at_ms: i64) -> Result<()>;
    fn arm_after_delay(&self, name: &str, minutes: u32) -> Result<()>;
    fn cancel(&self, name: &str) -> Result<()>;
}

/// A persisted reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderAlarm {
    pub key: IssueKey,
    pub fire_at_ts: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub repeats_remaining: u32,
}

impl ReminderAlarm {
    fn notice(&self) -> Notice {
        let title = match &self.title {
            Some(t) => format!("Reminder: {} {}", self.key, t),
            None => format!("Reminder: {}", self.key),
        };
        Notice {
            id: format!("{NOTICE_PREFIX}{}", self.key),
            title,
            message: self.note.clone().unwrap_or_default(),
            priority: Priority::High,
        }
    }
}

/// Parameters of a new reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderRequest {
    pub key: IssueKey,
    pub fire_at_ts: i64,
    pub title: Option<String>,
    pub note: Option<String>,
    pub repeats: u32,
}

/// What happened when a timer fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FireOutcome {
    /// The reminder was shown and re-armed.
    Rescheduled {
        repeats_remaining: u32,
        next_fire_at: i64,
    },
    /// The reminder was shown for the last time and deleted.
    Removed,
    /// The timer name is not a reminder, or the reminder no longer exists.
    Unknown,
}

/// Store name (and timer name) of the alarm for `key`.
pub fn alarm_name(key: &IssueKey) -> String {
    format!("{}{}", keys::ALARM_PREFIX, key)
}

/// Inverse of [`alarm_name`].
pub fn key_from_alarm_name(name: &str) -> Option<IssueKey> {
    name.strip_prefix(keys::ALARM_PREFIX)
        .and_then(|k| IssueKey::parse(k).ok())
}

/// Reminder scheduler. Owns the alarm records in the local scope.
pub struct Reminders<'a> {
    store: &'a dyn Store,
    clock: &'a dyn ClockSource,
    timer: &'a dyn Timer,
    notifier: &'a dyn Notifier,
}

impl<'a> Reminders<'a> {
    pub fn new(
        store: &'a dyn Store,
        clock: &'a dyn ClockSource,
        timer: &'a dyn Timer,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Reminders {
            store,
            clock,
            timer,
            notifier,
        }
    }

    /// Persists a reminder and arms its timer. Scheduling a key that already
    /// has a reminder replaces it.
    pub fn schedule(&self, request: ReminderRequest) -> Result<ReminderAlarm> {
        let alarm = ReminderAlarm {
            key: request.key,
            fire_at_ts: request.fire_at_ts,
            title: request.title.filter(|t| !t.trim().is_empty()),
            note: request.note.filter(|n| !n.trim().is_empty()),
            repeats_remaining: request.repeats,
        };
        let name = alarm_name(&alarm.key);
        self.store.save(Scope::Local, &name, &alarm)?;
        self.timer.arm_at(&name, alarm.fire_at_ts)?;
        tracing::info!(key = %alarm.key, fire_at = alarm.fire_at_ts, "reminder scheduled");
        Ok(alarm)
    }

    pub fn get(&self, key: &IssueKey) -> Result<Option<ReminderAlarm>> {
        self.store.load(Scope::Local, &alarm_name(key))
    }

    /// Handles a fired timer named `name`.
    pub fn on_fire(&self, name: &str) -> Result<FireOutcome> {
        let Some(key) = key_from_alarm_name(name) else {
            return Ok(FireOutcome::Unknown);
        };
        let Some(mut alarm) = self.get(&key)? else {
            tracing::debug!(%key, "fired reminder no longer exists");
            return Ok(FireOutcome::Unknown);
        };

        self.notifier.show(&alarm.notice())?;

        if alarm.repeats_remaining > 0 {
            alarm.repeats_remaining -= 1;
            alarm.fire_at_ts =
                self.clock.now_ms() + i64::from(REPEAT_INTERVAL_MINUTES) * MINUTE_MS;
            self.store.save(Scope::Local, name, &alarm)?;
            self.timer.arm_after_delay(name, REPEAT_INTERVAL_MINUTES)?;
            tracing::info!(%key, repeats_remaining = alarm.repeats_remaining, "reminder re-armed");
            Ok(FireOutcome::Rescheduled {
                repeats_remaining: alarm.repeats_remaining,
                next_fire_at: alarm.fire_at_ts,
            })
        } else {
            self.store.remove(Scope::Local, &[name])?;
            tracing::info!(%key, "reminder removed");
            Ok(FireOutcome::Removed)
        }
    }

    /// Cancels and deletes the reminder for `key`. Clearing a key with no
    /// reminder is not an error.
    pub fn clear(&self, key: &IssueKey) -> Result<()> {
        let name = alarm_name(key);
        self.timer.cancel(&name)?;
        self.store.remove(Scope::Local, &[&name])
    }

    /// Every stored reminder, soonest first.
    pub fn list(&self) -> Result<Vec<ReminderAlarm>> {
        let names: Vec<String> = self
            .store
            .keys(Scope::Local)?
            .into_iter()
            .filter(|k| k.starts_with(keys::ALARM_PREFIX))
            .collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut alarms = Vec::with_capacity(refs.len());
        for (_, value) in self.store.get(Scope::Local, &refs)? {
            alarms.push(serde_json::from_value::<ReminderAlarm>(value)?);
        }
        alarms.sort_by(|a, b| a.fire_at_ts.cmp(&b.fire_at_ts).then(a.key.cmp(&b.key)));
        Ok(alarms)
    }
}

#[cfg(test)]
#[path = "reminder_tests.rs"]
mod tests;
