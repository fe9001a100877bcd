// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let color = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = color(colors::codes::HEADER);
    let literal = color(colors::codes::LITERAL);
    let context = color(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        header_text("Options:")
    )
}

fn header_text(text: &str) -> String {
    if colors::should_colorize() {
        colors::header(text)
    } else {
        text.to_string()
    }
}

fn cmd(name: &str) -> String {
    colors::maybe_literal(name)
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_issues}
  {open}        Open every issue key found in text
  {suggest}     Preview where keys would open
  {parse}       List the issue keys found in text
  {history}     Show and edit recently opened issues
  {remind}      Schedule reminders for an issue
  {stats}       Show how many issues have been opened

{header_setup}
  {mapping}     Manage prefix to URL mappings
  {config}      Theme, smart links, export and import
  {completion}  Generate shell completions
",
        header_issues = header_text("Issues:"),
        header_setup = header_text("Setup:"),
        open = cmd("open"),
        suggest = cmd("suggest"),
        parse = cmd("parse"),
        history = cmd("history"),
        remind = cmd("remind"),
        stats = cmd("stats"),
        mapping = cmd("mapping"),
        config = cmd("config"),
        completion = cmd("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  qf mapping add ABC https://tracker.example.com/browse/    Map a prefix
  qf open \"ABC-1, ABC-2\"                                   Open two issues
  qf history list                                          See what you opened",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
