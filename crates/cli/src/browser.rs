// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Opens URLs by spawning a browser process.

use std::process::{Command, Stdio};

use qf_core::{Navigator, TabId};

/// Platform opener used when no browser command is configured.
#[cfg(target_os = "macos")]
const DEFAULT_OPENER: &[&str] = &["open"];
#[cfg(target_os = "windows")]
const DEFAULT_OPENER: &[&str] = &["cmd", "/C", "start", ""];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const DEFAULT_OPENER: &[&str] = &["xdg-open"];

/// A [`Navigator`] that runs a command with the URL as its last argument.
///
/// Each spawned process counts as one tab; its pid is the tab id.
#[derive(Debug, Clone)]
pub struct SystemBrowser {
    program: String,
    args: Vec<String>,
}

impl SystemBrowser {
    /// Uses `command` (split on whitespace) or the platform opener.
    pub fn new(command: Option<&str>) -> Self {
        let mut words = match command {
            Some(cmd) if !cmd.trim().is_empty() => {
                cmd.split_whitespace().map(str::to_string).collect::<Vec<String>>()
            }
            _ => DEFAULT_OPENER.iter().map(|s| s.to_string()).collect(),
        }
        .into_iter();
        SystemBrowser {
            program: words.next().unwrap_or_default(),
            args: words.collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Navigator for SystemBrowser {
    fn open_in_new_tab(&self, url: &str) -> qf_core::Result<TabId> {
        tracing::debug!(program = %self.program, url, "spawning browser");
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| qf_core::Error::Navigation {
                url: url.to_string(),
                reason: format!("cannot run '{}': {}", self.program, e),
            })?;
        Ok(TabId::from(child.id()))
    }
}

#[cfg(test)]
#[path = "browser_tests.rs"]
mod tests;
