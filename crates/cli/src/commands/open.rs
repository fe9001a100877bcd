// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use qf_core::{ClockSource, DispatchOutcome, Dispatcher, Navigator, Notifier, Store, SystemClock};

use super::{open_store, read_text};
use crate::browser::SystemBrowser;
use crate::cli::TextArgs;
use crate::error::{Error, Result};
use crate::notify::TerminalNotifier;

pub fn run(args: &TextArgs) -> Result<()> {
    let text = read_text(args)?;
    let (store, config) = open_store()?;
    let browser = SystemBrowser::new(config.browser_command().as_deref());
    let notifier = TerminalNotifier::stderr();
    let outcome = run_impl(&store, &SystemClock, &browser, &notifier, &text)?;

    if outcome.failures.is_empty() {
        Ok(())
    } else {
        Err(Error::PartialDispatch {
            opened: outcome.opened.len(),
            failed: outcome.failures.len(),
        })
    }
}

/// Internal implementation that accepts collaborators for testing.
pub(crate) fn run_impl(
    store: &dyn Store,
    clock: &dyn ClockSource,
    navigator: &dyn Navigator,
    notifier: &dyn Notifier,
    text: &str,
) -> Result<DispatchOutcome> {
    let mut dispatcher = Dispatcher::new(store, clock, navigator, notifier);
    let outcome = dispatcher.open_text(text)?;

    for key in &outcome.opened {
        println!("Opened {}", key);
    }
    for failure in &outcome.failures {
        eprintln!("warning: {}: {}", failure.key, failure.error);
    }
    if let Some(e) = &outcome.notice_error {
        eprintln!("warning: {}", e);
    }
    Ok(outcome)
}

#[cfg(test)]
#[path = "open_tests.rs"]
mod tests;
