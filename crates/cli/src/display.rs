// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering for listings.

use chrono::{DateTime, Local, TimeZone, Utc};

use qf_core::{HistoryItem, Mapping, ReminderAlarm, Suggestion};

use crate::colors;

/// Shown by `history list` when the ledger is empty.
pub const EMPTY_HISTORY: &str = "No history yet.";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Formats epoch milliseconds in `tz`. Out-of-range values print as `-`.
pub fn format_timestamp_in<Tz: TimeZone>(ms: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::<Utc>::from_timestamp_millis(ms) {
        Some(dt) => dt.with_timezone(tz).format(TIME_FORMAT).to_string(),
        None => "-".to_string(),
    }
}

/// Formats epoch milliseconds in the local timezone.
pub fn format_timestamp(ms: i64) -> String {
    format_timestamp_in(ms, &Local)
}

/// Suffix celebrating the lifetime count.
pub fn badge_suffix(count: u64) -> &'static str {
    match count {
        100 => " 💯",
        101.. => " 🚀",
        51..=99 => " 👍",
        1..=50 => " ✅",
        0 => "",
    }
}

/// `N Issue/s searched` plus the celebration suffix.
pub fn badge_text(count: u64) -> String {
    format!("{count} Issue/s searched{}", badge_suffix(count))
}

/// One history row: pin marker, key, timestamp, title, then URL and note
/// on indented lines.
pub fn format_history_item<Tz: TimeZone>(item: &HistoryItem, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let marker = if item.pinned {
        colors::maybe_pinned("*")
    } else {
        " ".to_string()
    };
    let mut line = format!(
        "{marker} {} {}",
        colors::maybe_literal(item.key.as_str()),
        colors::maybe_context(&format_timestamp_in(item.last_access_ts, tz)),
    );
    if let Some(title) = item.title.as_deref().filter(|t| !t.is_empty()) {
        line.push_str("  ");
        line.push_str(title);
    }
    line.push_str("\n    ");
    line.push_str(&colors::maybe_context(&item.url));
    if let Some(note) = &item.note {
        line.push_str("\n    note: ");
        line.push_str(note);
    }
    line
}

pub fn format_mapping(mapping: &Mapping) -> String {
    let mut line = format!(
        "{}  {}",
        colors::maybe_literal(&mapping.prefix),
        colors::maybe_context(&mapping.base_url)
    );
    if let Some(project) = &mapping.project {
        line.push_str(&format!("  ({project})"));
    }
    line
}

pub fn format_reminder<Tz: TimeZone>(alarm: &ReminderAlarm, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut line = format!(
        "{} {}",
        colors::maybe_literal(alarm.key.as_str()),
        colors::maybe_context(&format_timestamp_in(alarm.fire_at_ts, tz)),
    );
    if alarm.repeats_remaining > 0 {
        line.push_str(&format!(" (+{} repeats)", alarm.repeats_remaining));
    }
    if let Some(title) = &alarm.title {
        line.push_str("  ");
        line.push_str(title);
    }
    if let Some(note) = &alarm.note {
        line.push_str("\n    note: ");
        line.push_str(note);
    }
    line
}

pub fn format_suggestion(suggestion: &Suggestion) -> String {
    suggestion.to_string()
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
