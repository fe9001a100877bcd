// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use qfrs::Cli;

fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let directive = qfrs::env::log_filter().unwrap_or_else(|| "warn".to_string());
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    setup_logging();
    let cli = Cli::parse();
    if let Err(e) = qfrs::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
