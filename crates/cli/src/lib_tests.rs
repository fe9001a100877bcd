// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

//! Argument parsing tests. Commands that touch the store are covered by the
//! command modules and by the integration tests.

use crate::{Cli, Command, ConfigCommand, HistoryCommand, OutputFormat, RemindCommand, Toggle};
use clap::{CommandFactory, Parser};

fn parse(args: &[&str]) -> Command {
    Cli::try_parse_from(std::iter::once("qf").chain(args.iter().copied()))
        .unwrap()
        .command
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn open_collects_words() {
    let Command::Open { text } = parse(&["open", "ABC-1,", "ABC-2"]) else {
        unreachable!("expected open");
    };
    assert_eq!(text.joined(), "ABC-1, ABC-2");
    assert!(!text.wants_stdin());
}

#[test]
fn open_without_text_reads_stdin() {
    let Command::Open { text } = parse(&["open"]) else {
        unreachable!("expected open");
    };
    assert!(text.wants_stdin());
    let Command::Open { text } = parse(&["open", "-"]) else {
        unreachable!("expected open");
    };
    assert!(text.wants_stdin());
}

#[test]
fn output_flag_selects_json() {
    let Command::History(HistoryCommand::List { output }) =
        parse(&["history", "list", "-o", "json"])
    else {
        unreachable!("expected history list");
    };
    assert_eq!(output.output, OutputFormat::Json);
}

#[test]
fn remind_add_defaults() {
    let Command::Remind(RemindCommand::Add { key, at, repeat, .. }) =
        parse(&["remind", "add", "ABC-1", "30m"])
    else {
        unreachable!("expected remind add");
    };
    assert_eq!(key, "ABC-1");
    assert_eq!(at, "30m");
    assert_eq!(repeat, 0);
}

#[test]
fn smart_links_toggle() {
    let Command::Config(ConfigCommand::SmartLinks { state }) =
        parse(&["config", "smart-links", "on"])
    else {
        unreachable!("expected smart-links");
    };
    assert_eq!(state, Some(Toggle::On));
}

#[test]
fn history_title_rejects_blank() {
    assert!(Cli::try_parse_from(["qf", "history", "title", "ABC-1", "  "]).is_err());
}
