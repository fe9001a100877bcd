// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! qfrs - the library behind the `qf` command.
//!
//! `qf` finds issue keys such as `ABC-123` in text, opens them at the tracker
//! URL configured for their prefix, and keeps a short history of what was
//! opened. The domain logic lives in `qf-core`; this crate adds the terminal
//! host around it.
//!
//! # Main Components
//!
//! - [`Config`] - Host configuration (browser command, store location)
//! - [`browser::SystemBrowser`] - Opens URLs by spawning a browser process
//! - [`notify::TerminalNotifier`] - Shows notices on stderr
//! - [`timer::StoreTimer`] - Persistent timers fired by `qf remind tick`
//! - [`Error`] - Error types for all commands

mod cli;
mod commands;
mod display;

pub mod browser;
pub mod colors;
pub mod config;
pub mod env;
pub mod error;
pub mod help;
pub mod notify;
pub mod timer;

pub use cli::{
    Cli, Command, ConfigCommand, HistoryCommand, MappingCommand, OutputArgs, OutputFormat,
    RemindCommand, TextArgs, ThemeArg, Toggle,
};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Open { text } => commands::open::run(&text),
        Command::Suggest { text, output } => commands::parse::suggest_keys(&text, output.output),
        Command::Parse { text, output } => commands::parse::parse(&text, output.output),
        Command::History(cmd) => commands::history::run(cmd),
        Command::Stats { output } => commands::stats::run(output.output),
        Command::Mapping(cmd) => commands::mapping::run(cmd),
        Command::Config(cmd) => commands::config::run(cmd),
        Command::Remind(cmd) => commands::remind::run(cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "qf", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
