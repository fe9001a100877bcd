// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock access.
//!
//! Every timestamp the core persists (`lastAccessTs`, `fireAtTs`) is epoch
//! milliseconds read through [`ClockSource`], so tests can pin time.

use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds in one minute.
pub const MINUTE_MS: i64 = 60_000;

/// Trait for getting the current wall clock time.
pub trait ClockSource: Send + Sync {
    /// Returns the current time in milliseconds since Unix epoch.
    fn now_ms(&self) -> i64;
}

/// System clock implementation using `std::time::SystemTime`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

impl<C: ClockSource> ClockSource for &C {
    fn now_ms(&self) -> i64 {
        (*self).now_ms()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
