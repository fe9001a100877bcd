// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::run_impl;
use crate::cli::MappingCommand;
use crate::commands::testing::TestContext;
use crate::error::Error;
use qf_core::store::keys;
use qf_core::{MappingResolver, Scope, StoreExt};
use serde_json::json;
use yare::parameterized;

fn add(prefix: &str, url: &str) -> MappingCommand {
    MappingCommand::Add {
        prefix: prefix.into(),
        base_url: url.into(),
        project: None,
    }
}

#[test]
fn add_normalizes_prefix_and_url() {
    let ctx = TestContext::new();
    run_impl(&ctx.store, add(" abc ", "https://x//")).unwrap();
    let resolver = MappingResolver::new(&ctx.store);
    assert_eq!(
        resolver.get_base_url_for_key("ABC-7").unwrap().as_deref(),
        Some("https://x/")
    );
}

#[test]
fn add_keeps_project_name() {
    let ctx = TestContext::new();
    let cmd = MappingCommand::Add {
        prefix: "WEB".into(),
        base_url: "https://w".into(),
        project: Some("Website".into()),
    };
    run_impl(&ctx.store, cmd).unwrap();
    let set = MappingResolver::new(&ctx.store).load().unwrap();
    assert_eq!(set.find("web").unwrap().project.as_deref(), Some("Website"));
}

#[test]
fn duplicate_prefix_is_rejected_without_write() {
    let ctx = TestContext::new().with_mapping("ABC", "https://one");
    let err = run_impl(&ctx.store, add("abc", "https://two")).unwrap_err();
    assert!(matches!(err, Error::Core(qf_core::Error::DuplicatePrefix(_))));
    assert_eq!(
        MappingResolver::new(&ctx.store)
            .get_base_url_for_key("ABC-1")
            .unwrap()
            .as_deref(),
        Some("https://one/")
    );
}

#[test]
fn add_succeeds_next_to_legacy_stored_mapping() {
    let ctx = TestContext::new();
    ctx.store
        .save(
            Scope::Sync,
            keys::MAPPINGS,
            &json!([{ "prefix": "abc", "baseUrl": "jira.example.com/browse" }]),
        )
        .unwrap();

    run_impl(&ctx.store, add("XY", "https://x/")).unwrap();

    let set = MappingResolver::new(&ctx.store).load().unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.base_url_for_key("ABC-1"), Some("jira.example.com/browse/"));
    assert_eq!(set.base_url_for_key("XY-1"), Some("https://x/"));
}

#[parameterized(
    bad_prefix = { "1AB", "https://x" },
    relative_url = { "ABC", "tracker/browse" },
    empty_url = { "ABC", "   " },
)]
fn invalid_rows_are_rejected(prefix: &str, url: &str) {
    let ctx = TestContext::new();
    assert!(run_impl(&ctx.store, add(prefix, url)).is_err());
    assert!(MappingResolver::new(&ctx.store).load().unwrap().is_empty());
}

#[test]
fn remove_existing_and_missing() {
    let ctx = TestContext::new()
        .with_mapping("ABC", "https://x")
        .with_mapping("XYZ", "https://y");
    run_impl(&ctx.store, MappingCommand::Remove { prefix: "abc".into() }).unwrap();
    let set = MappingResolver::new(&ctx.store).load().unwrap();
    assert_eq!(set.len(), 1);
    assert!(set.find("XYZ").is_some());

    let err = run_impl(&ctx.store, MappingCommand::Remove { prefix: "abc".into() }).unwrap_err();
    assert!(matches!(err, Error::MappingNotFound(p) if p == "ABC"));
}
