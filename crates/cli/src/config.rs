// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Host configuration.
//!
//! Configuration is stored in `<config dir>/quickfind/config.toml` and includes:
//! - `browser`: command used to open URLs (the platform opener when unset)
//! - `store`: path of the SQLite store (`<state dir>/quickfind/store.db` when unset)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "quickfind";
const CONFIG_FILE_NAME: &str = "config.toml";
const STORE_FILE_NAME: &str = "store.db";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Command that opens a URL, e.g. `firefox` or `open -a Safari`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<String>,
    /// Store location (absolute, or relative to the state directory).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<PathBuf>,
}

impl Config {
    /// Loads `config.toml` from the configuration directory. A missing file
    /// yields the default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_dir()?)
    }

    /// Loads `config.toml` from `dir`.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Saves configuration to `dir`, creating it if needed.
    pub fn save_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(dir.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }

    /// Resolves the store path against `state_dir`.
    pub fn store_path_in(&self, state_dir: &Path) -> PathBuf {
        match &self.store {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => state_dir.join(path),
            None => state_dir.join(STORE_FILE_NAME),
        }
    }

    /// Store path under the resolved state directory.
    pub fn store_path(&self) -> Result<PathBuf> {
        Ok(self.store_path_in(&state_dir()?))
    }

    /// Browser command: `QF_BROWSER` first, then the config file.
    pub fn browser_command(&self) -> Option<String> {
        env::browser().or_else(|| self.browser.clone())
    }
}

/// Configuration directory: `QF_CONFIG_DIR`, else `<config dir>/quickfind`.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = env::config_dir() {
        return Ok(dir);
    }
    dirs::config_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .ok_or_else(|| Error::Config("cannot determine configuration directory".to_string()))
}

/// State directory: `QF_STATE_DIR`, else `<state dir>/quickfind` (falling
/// back to the local data directory on platforms without a state dir).
pub fn state_dir() -> Result<PathBuf> {
    if let Some(dir) = env::state_dir() {
        return Ok(dir);
    }
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|d| d.join(APP_DIR_NAME))
        .ok_or_else(|| Error::Config("cannot determine state directory".to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
