// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use qf_core::{ClockSource, History, Store, SystemClock};
use serde::Serialize;

use super::{open_store, print_json};
use crate::cli::OutputFormat;
use crate::display::badge_text;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Stats {
    /// Issues opened since install.
    pub lifetime: u64,
    /// Accesses recorded in the current ledger.
    pub recorded: u64,
    /// Items the ledger currently holds.
    pub remembered: usize,
}

pub fn run(output: OutputFormat) -> Result<()> {
    let (store, _) = open_store()?;
    let stats = collect(&store, &SystemClock)?;
    match output {
        OutputFormat::Json => print_json(&stats),
        OutputFormat::Text => {
            println!("{}", badge_text(stats.lifetime));
            println!(
                "{} remembered, {} recorded since last clear",
                stats.remembered, stats.recorded
            );
            Ok(())
        }
    }
}

pub(crate) fn collect(store: &dyn Store, clock: &dyn ClockSource) -> Result<Stats> {
    let history = History::new(store, clock);
    let ledger = history.load()?;
    Ok(Stats {
        lifetime: history.get_lifetime_count()?,
        recorded: ledger.count,
        remembered: ledger.items.len(),
    })
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
