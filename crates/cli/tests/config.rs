// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn theme_defaults_to_light_and_persists() {
    let sb = Sandbox::new();
    sb.qf()
        .args(["config", "theme"])
        .assert()
        .success()
        .stdout("light\n");
    sb.qf().args(["config", "theme", "dark"]).assert().success();
    sb.qf()
        .args(["config", "theme"])
        .assert()
        .success()
        .stdout("dark\n");
}

#[test]
fn smart_links_toggle() {
    let sb = Sandbox::new();
    sb.qf()
        .args(["config", "smart-links"])
        .assert()
        .success()
        .stdout("off\n");
    sb.qf()
        .args(["config", "smart-links", "on"])
        .assert()
        .success();
    sb.qf()
        .args(["config", "smart-links"])
        .assert()
        .success()
        .stdout("on\n");
}

#[test]
fn export_to_file_then_import_elsewhere() {
    let source = Sandbox::new();
    source.map("ABC", "https://x");
    source.qf().args(["config", "theme", "dark"]).assert().success();
    let file = source.dir.path().join("backup/qf.json");
    source
        .qf()
        .args(["config", "export"])
        .arg(&file)
        .assert()
        .success();

    let target = Sandbox::new();
    target
        .qf()
        .args(["config", "import"])
        .arg(&file)
        .assert()
        .success()
        .stdout("Imported 1 mapping\n");
    target
        .qf()
        .args(["config", "theme"])
        .assert()
        .success()
        .stdout("dark\n");
    let list = target.json(&["mapping", "list"]);
    assert_eq!(list[0]["baseUrl"], "https://x/");
}

#[test]
fn export_to_stdout_is_json() {
    let sb = Sandbox::new();
    sb.map("ABC", "https://x");
    let output = sb.qf().args(["config", "export"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["mappings"][0]["prefix"], "ABC");
    assert_eq!(value["themePreference"], "light");
    assert!(value["exportedAt"].is_string());
}

#[test]
fn import_from_stdin_rejects_duplicates() {
    let sb = Sandbox::new();
    sb.qf()
        .args(["config", "import", "-"])
        .write_stdin(
            r#"{"mappings":[{"prefix":"A1","baseUrl":"https://a"},{"prefix":"a1","baseUrl":"https://b"}]}"#,
        )
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate prefix"));
}

#[test]
fn config_file_store_location_is_used() {
    let sb = Sandbox::new();
    let config_dir = sb.dir.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "store = \"elsewhere.db\"\n").unwrap();

    sb.map("ABC", "https://x");
    assert!(sb.dir.path().join("state/elsewhere.db").exists());
}
