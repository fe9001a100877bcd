// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shows notices on the terminal.

use std::io::Write;
use std::sync::Mutex;

use qf_core::{Notice, Notifier, Priority};

/// A [`Notifier`] writing one block per notice to a writer (stderr by default).
pub struct TerminalNotifier<W: Write> {
    out: Mutex<W>,
}

impl TerminalNotifier<std::io::Stderr> {
    pub fn stderr() -> Self {
        TerminalNotifier::new(std::io::stderr())
    }
}

impl<W: Write> TerminalNotifier<W> {
    pub fn new(out: W) -> Self {
        TerminalNotifier {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Renders a notice as it appears on the terminal.
pub fn render(notice: &Notice) -> String {
    let marker = match notice.priority {
        Priority::High => "!! ",
        Priority::Normal => "! ",
        Priority::Low => "",
    };
    if notice.message.is_empty() {
        format!("{marker}{}", notice.title)
    } else {
        format!("{marker}{}\n  {}", notice.title, notice.message)
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn show(&self, notice: &Notice) -> qf_core::Result<()> {
        tracing::info!(id = %notice.id, priority = notice.priority.as_i32(), "notice");
        let mut out = self
            .out
            .lock()
            .map_err(|_| qf_core::Error::Notification("output lock poisoned".to_string()))?;
        writeln!(out, "{}", render(notice))
            .map_err(|e| qf_core::Error::Notification(e.to_string()))
    }
}

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
