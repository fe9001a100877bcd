// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Local;
use qf_core::{ClockSource, History, HistoryLedger, Store, SystemClock};

use super::{open_store, parse_key, print_json};
use crate::cli::{HistoryCommand, OutputFormat};
use crate::display::{format_history_item, EMPTY_HISTORY};
use crate::error::{Error, Result};

pub fn run(cmd: HistoryCommand) -> Result<()> {
    let (store, _) = open_store()?;
    run_impl(&store, &SystemClock, cmd)
}

/// Internal implementation that accepts store/clock for testing.
pub(crate) fn run_impl(store: &dyn Store, clock: &dyn ClockSource, cmd: HistoryCommand) -> Result<()> {
    let history = History::new(store, clock);
    match cmd {
        HistoryCommand::List { output } => list(&history.load()?, output.output),
        HistoryCommand::Delete { key } => {
            let key = parse_key(&key)?;
            if history.delete_item(&key)? {
                println!("Deleted {}", key);
            } else {
                println!("{} was not in history", key);
            }
            Ok(())
        }
        HistoryCommand::Pin { key } => set_pinned(&history, &key, true),
        HistoryCommand::Unpin { key } => set_pinned(&history, &key, false),
        HistoryCommand::Note { key, note } => {
            let key = parse_key(&key)?;
            let note = Some(note.join(" ")).filter(|n| !n.trim().is_empty());
            let cleared = note.is_none();
            if !history.set_note(&key, note)? {
                return Err(Error::HistoryNotFound(key.to_string()));
            }
            if cleared {
                println!("Cleared note on {}", key);
            } else {
                println!("Noted {}", key);
            }
            Ok(())
        }
        HistoryCommand::Title { key, title } => {
            let key = parse_key(&key)?;
            if history.update_title(&key, title.trim())? {
                println!("Titled {}", key);
                return Ok(());
            }
            match history.load()?.get(&key) {
                Some(_) => {
                    println!("{} already has a title", key);
                    Ok(())
                }
                None => Err(Error::HistoryNotFound(key.to_string())),
            }
        }
        HistoryCommand::Clear => {
            history.clear()?;
            println!("Cleared history");
            Ok(())
        }
    }
}

fn set_pinned(history: &History<'_>, raw: &str, pinned: bool) -> Result<()> {
    let key = parse_key(raw)?;
    if !history.set_pinned(&key, pinned)? {
        return Err(Error::HistoryNotFound(key.to_string()));
    }
    println!("{} {}", if pinned { "Pinned" } else { "Unpinned" }, key);
    Ok(())
}

fn list(ledger: &HistoryLedger, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => print_json(ledger),
        OutputFormat::Text => {
            if ledger.items.is_empty() {
                println!("{}", EMPTY_HISTORY);
            }
            for item in &ledger.items {
                println!("{}", format_history_item(item, &Local));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
