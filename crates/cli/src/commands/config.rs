// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `qf config`: preferences and whole-configuration export/import.

use std::fs;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use qf_core::{ConfigSnapshot, Settings, Store, Theme};

use super::open_store;
use crate::cli::{ConfigCommand, Toggle};
use crate::error::{Error, Result};

pub fn run(cmd: ConfigCommand) -> Result<()> {
    let (store, _) = open_store()?;
    match cmd {
        ConfigCommand::Export { file } => {
            let json = export_impl(&store, Utc::now())?;
            match file {
                Some(path) => {
                    write_file(&path, &json)?;
                    println!("Exported configuration to {}", path.display());
                }
                None => println!("{}", json),
            }
            Ok(())
        }
        ConfigCommand::Import { file } => {
            let json = if file == "-" {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                text
            } else {
                fs::read_to_string(&file)?
            };
            let count = import_impl(&store, &json)?;
            println!("Imported {} mapping{}", count, if count == 1 { "" } else { "s" });
            Ok(())
        }
        ConfigCommand::Theme { theme } => theme_impl(&store, theme.map(Theme::from)),
        ConfigCommand::SmartLinks { state } => smart_links_impl(&store, state),
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("{contents}\n"))?;
    Ok(())
}

/// Pretty JSON snapshot of the current configuration.
pub(crate) fn export_impl(store: &dyn Store, now: DateTime<Utc>) -> Result<String> {
    let snapshot = Settings::new(store).export(now, env!("CARGO_PKG_VERSION"))?;
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Applies an exported snapshot. Returns the number of mappings imported.
pub(crate) fn import_impl(store: &dyn Store, json: &str) -> Result<usize> {
    if json.trim().is_empty() {
        return Err(Error::FieldRequired("configuration JSON"));
    }
    let snapshot: ConfigSnapshot = serde_json::from_str(json)?;
    Ok(Settings::new(store).import(&snapshot)?.len())
}

pub(crate) fn theme_impl(store: &dyn Store, theme: Option<Theme>) -> Result<()> {
    let settings = Settings::new(store);
    match theme {
        Some(theme) => {
            settings.set_theme(theme)?;
            println!("Theme set to {}", theme);
        }
        None => println!("{}", settings.theme()?),
    }
    Ok(())
}

pub(crate) fn smart_links_impl(store: &dyn Store, state: Option<Toggle>) -> Result<()> {
    let settings = Settings::new(store);
    let label = |on: bool| if on { "on" } else { "off" };
    match state {
        Some(state) => {
            settings.set_smart_links_enabled(state.enabled())?;
            println!("Smart links {}", label(state.enabled()));
        }
        None => println!("{}", label(settings.smart_links_enabled()?)),
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
