// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Local};
use qf_core::clock::MINUTE_MS;
use qf_core::{
    ClockSource, FireOutcome, Notifier, ReminderRequest, Reminders, Store, SystemClock, Timer,
};

use super::{open_store, parse_key, print_json};
use crate::cli::{OutputFormat, RemindCommand};
use crate::display::{format_reminder, format_timestamp};
use crate::error::{Error, Result};
use crate::notify::TerminalNotifier;
use crate::timer::StoreTimer;

pub fn run(cmd: RemindCommand) -> Result<()> {
    let (store, _) = open_store()?;
    let notifier = TerminalNotifier::stderr();
    run_impl(&store, &SystemClock, &notifier, cmd)
}

/// Internal implementation that accepts collaborators for testing.
pub(crate) fn run_impl(
    store: &dyn Store,
    clock: &dyn ClockSource,
    notifier: &dyn Notifier,
    cmd: RemindCommand,
) -> Result<()> {
    let timer = StoreTimer::new(store, clock);
    let reminders = Reminders::new(store, clock, &timer, notifier);
    match cmd {
        RemindCommand::Add {
            key,
            at,
            title,
            note,
            repeat,
        } => {
            let key = parse_key(&key)?;
            let fire_at_ts = parse_when(&at, clock.now_ms())?;
            let alarm = reminders.schedule(ReminderRequest {
                key,
                fire_at_ts,
                title,
                note,
                repeats: repeat,
            })?;
            println!(
                "Reminder for {} at {}",
                alarm.key,
                format_timestamp(alarm.fire_at_ts)
            );
            Ok(())
        }
        RemindCommand::Clear { key } => {
            let key = parse_key(&key)?;
            let existed = reminders.get(&key)?.is_some();
            reminders.clear(&key)?;
            if existed {
                println!("Cleared reminder for {}", key);
            } else {
                println!("No reminder for {}", key);
            }
            Ok(())
        }
        RemindCommand::List { output } => {
            let alarms = reminders.list()?;
            match output.output {
                OutputFormat::Json => print_json(&alarms),
                OutputFormat::Text => {
                    if alarms.is_empty() {
                        println!("No reminders scheduled.");
                    }
                    for alarm in &alarms {
                        println!("{}", format_reminder(alarm, &Local));
                    }
                    Ok(())
                }
            }
        }
        RemindCommand::Tick => {
            let fired = tick(&timer, &reminders, clock.now_ms())?;
            tracing::debug!(fired, "tick finished");
            Ok(())
        }
    }
}

/// Fires every timer due at `now_ms`. Returns how many reminders were shown.
pub(crate) fn tick(timer: &StoreTimer<'_>, reminders: &Reminders<'_>, now_ms: i64) -> Result<usize> {
    let mut shown = 0;
    for due in timer.due(now_ms)? {
        // Disarm first: firing may re-arm the same name.
        timer.cancel(&due.name)?;
        match reminders.on_fire(&due.name) {
            Ok(FireOutcome::Unknown) => {
                tracing::debug!(name = %due.name, "dropped timer with no reminder");
            }
            Ok(_) => shown += 1,
            Err(e) => {
                timer.arm_at(&due.name, due.fire_at_ms)?;
                return Err(e.into());
            }
        }
    }
    Ok(shown)
}

/// Parses `30m`, `2h`, `1d`, a bare number of minutes, or an RFC 3339 time.
pub(crate) fn parse_when(input: &str, now_ms: i64) -> Result<i64> {
    let s = input.trim();
    let invalid = || Error::InvalidTime(input.to_string());

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.timestamp_millis());
    }

    let (digits, unit_ms) = match s.char_indices().last() {
        Some((i, 'm')) => (&s[..i], MINUTE_MS),
        Some((i, 'h')) => (&s[..i], 60 * MINUTE_MS),
        Some((i, 'd')) => (&s[..i], 24 * 60 * MINUTE_MS),
        Some(_) => (s, MINUTE_MS),
        None => return Err(invalid()),
    };
    let amount: i64 = digits.trim().parse().map_err(|_| invalid())?;
    if amount < 0 {
        return Err(invalid());
    }
    amount
        .checked_mul(unit_ms)
        .and_then(|offset| now_ms.checked_add(offset))
        .ok_or_else(invalid)
}

#[cfg(test)]
#[path = "remind_tests.rs"]
mod tests;
