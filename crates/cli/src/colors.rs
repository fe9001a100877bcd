// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and listing output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Commands, keys: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders, URLs, timestamps: medium grey
    pub const CONTEXT: u8 = 245;
    /// Pin marker: amber
    pub const PINNED: u8 = 214;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, keys) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (placeholders, URLs, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Apply the pinned-marker color to text.
pub fn pinned(text: &str) -> String {
    paint(codes::PINNED, text)
}

/// Like [`literal`], but only when colors are enabled.
pub fn maybe_literal(text: &str) -> String {
    if should_colorize() {
        literal(text)
    } else {
        text.to_string()
    }
}

/// Like [`context`], but only when colors are enabled.
pub fn maybe_context(text: &str) -> String {
    if should_colorize() {
        context(text)
    } else {
        text.to_string()
    }
}

/// Like [`pinned`], but only when colors are enabled.
pub fn maybe_pinned(text: &str) -> String {
    if should_colorize() {
        pinned(text)
    } else {
        text.to_string()
    }
}

/// Colorize an examples help block.
///
/// ```text
/// Examples:
///   qf open ABC-1           Open one issue
///   qf remind add <key>     Schedule a reminder
/// ```
///
/// Lines ending in `:` become headers; the command part of an example line
/// (everything before a run of two or more spaces) becomes literal, with
/// `<placeholders>` and quoted strings in context color.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + 256);
    for line in text.lines() {
        if !result.is_empty() {
            result.push('\n');
        }

        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            result.push_str(indent);
            result.push_str(&header(trimmed));
        } else if let Some(cmd_end) = find_description_start(trimmed) {
            result.push_str(indent);
            result.push_str(&colorize_command(&trimmed[..cmd_end]));
            result.push_str(&trimmed[cmd_end..]);
        } else {
            result.push_str(line);
        }
    }
    result
}

/// Colorize a command string word by word: `<placeholders>` and quoted
/// words in context color, everything else literal.
pub fn colorize_command(cmd: &str) -> String {
    cmd.split(' ')
        .map(|word| {
            if word.is_empty() {
                String::new()
            } else if word.starts_with('<') || word.starts_with('"') {
                context(word)
            } else {
                literal(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Byte offset where the description starts: the first run of two or more
/// spaces after some non-space text.
pub fn find_description_start(line: &str) -> Option<usize> {
    let start = line.find(|c: char| c != ' ')?;
    line[start..].find("  ").map(|pos| start + pos)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
