// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![cfg(unix)]

mod common;
use common::*;

#[test]
fn open_mapped_keys_records_history() {
    let sb = Sandbox::new();
    sb.map("ABC", "https://tracker.example.com/browse");

    sb.qf()
        .args(["open", "see abc-12 and ABC-13"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Opened ABC-12"))
        .stdout(predicate::str::contains("Opened ABC-13"));

    let history = sb.json(&["history", "list"]);
    assert_eq!(history["count"], 2);
    assert_eq!(history["items"][0]["key"], "ABC-13");
    assert_eq!(
        history["items"][1]["url"],
        "https://tracker.example.com/browse/ABC-12"
    );
}

#[test]
fn open_reads_stdin() {
    let sb = Sandbox::new();
    sb.map("ABC", "https://x");

    sb.qf()
        .arg("open")
        .write_stdin("ABC-1\nABC-2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Opened ABC-2"));
}

#[test]
fn unmapped_prefix_prints_one_notice() {
    let sb = Sandbox::new();
    sb.map("ABC", "https://x");

    sb.qf()
        .args(["open", "XYZ-1 QQ-2 ABC-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Opened ABC-1"))
        .stderr(predicate::str::contains("Add mapping for: XYZ-1, QQ-2"));
}

#[test]
fn text_without_keys_notifies() {
    let sb = Sandbox::new();
    sb.qf()
        .args(["open", "hello world"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No issue keys found"));
}

#[test]
fn failing_browser_is_reported() {
    let sb = Sandbox::new();
    sb.map("ABC", "https://x");

    sb.qf()
        .env("QF_BROWSER", "qf-no-such-browser-binary")
        .args(["open", "ABC-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("some keys failed to open"));

    let stats = sb.json(&["stats"]);
    assert_eq!(stats["lifetime"], 0);
}

#[test]
fn suggest_previews_without_recording() {
    let sb = Sandbox::new();
    sb.map("ABC", "https://x");

    sb.qf()
        .args(["suggest", "ABC-1 XYZ-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Open ABC-1 at https://x/ABC-1"))
        .stdout(predicate::str::contains("XYZ-2: no mapping configured"));

    assert_eq!(sb.json(&["stats"])["lifetime"], 0);
}
