// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` by commands that take
//! free text or emit listings.

use clap::Args;

use super::OutputFormat;

/// Free text to scan for issue keys.
#[derive(Args, Clone, Debug, Default)]
pub struct TextArgs {
    /// Text containing issue keys; read from stdin when omitted or `-`
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,
}

impl TextArgs {
    /// True when the text should come from stdin.
    pub fn wants_stdin(&self) -> bool {
        self.text.is_empty() || (self.text.len() == 1 && self.text[0] == "-")
    }

    /// The words joined back into one string.
    pub fn joined(&self) -> String {
        self.text.join(" ")
    }
}

/// Output format selection.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct OutputArgs {
    /// Output format (text, json)
    #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
    pub output: OutputFormat,
}
