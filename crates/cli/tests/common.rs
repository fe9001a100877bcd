// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// An isolated home for one test: its own state and config directories and
/// a browser command that succeeds without opening anything.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Sandbox {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn qf(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("qf");
        cmd.env("QF_STATE_DIR", self.dir.path().join("state"))
            .env("QF_CONFIG_DIR", self.dir.path().join("config"))
            .env("QF_BROWSER", "true")
            .env("NO_COLOR", "1")
            .env_remove("COLOR")
            .env_remove("QF_LOG");
        cmd
    }

    /// Maps `prefix` to `url`, asserting success.
    pub fn map(&self, prefix: &str, url: &str) -> &Self {
        self.qf()
            .args(["mapping", "add", prefix, url])
            .assert()
            .success();
        self
    }

    /// Runs `qf <args> -o json` and parses stdout.
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self.qf().args(args).args(["-o", "json"]).output().unwrap();
        assert!(output.status.success(), "qf {:?} failed", args);
        serde_json::from_slice(&output.stdout).unwrap()
    }
}
