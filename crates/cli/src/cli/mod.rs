// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use qf_core::Theme;

pub use args::{OutputArgs, TextArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Theme choice accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

/// On/off switch for boolean preferences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn enabled(self) -> bool {
        self == Toggle::On
    }
}

#[derive(Parser)]
#[command(name = "qf")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Open issue-tracker keys like ABC-123 straight from text")]
#[command(
    long_about = "Open issue-tracker keys like ABC-123 straight from text.\n\n\
    Map key prefixes to tracker URLs, open every key found in a piece of text, \
    and keep a short history of what you opened."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Open every issue key found in text
    #[command(after_help = colors::examples("\
Examples:
  qf open ABC-1                   Open one issue
  qf open \"ABC-1, xyz-22\"         Open several keys in one go
  pbpaste | qf open               Open keys from the clipboard"))]
    Open {
        #[command(flatten)]
        text: TextArgs,
    },

    /// Preview where the keys in text would open
    Suggest {
        #[command(flatten)]
        text: TextArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the issue keys found in text
    Parse {
        #[command(flatten)]
        text: TextArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show and edit recently opened issues
    #[command(subcommand)]
    History(HistoryCommand),

    /// Show how many issues have been opened
    Stats {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Manage prefix to URL mappings
    #[command(subcommand)]
    Mapping(MappingCommand),

    /// Theme, smart links, export and import
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Schedule reminders for an issue
    #[command(subcommand)]
    Remind(RemindCommand),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// List remembered issues, pinned first
    List {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Forget one issue
    Delete {
        /// Issue key
        key: String,
    },

    /// Keep an issue at the top of the list
    Pin {
        /// Issue key
        key: String,
    },

    /// Release a pinned issue
    Unpin {
        /// Issue key
        key: String,
    },

    /// Attach a note to an issue (omit the note to clear it)
    Note {
        /// Issue key
        key: String,

        /// Note text
        note: Vec<String>,
    },

    /// Record the page title of an issue that has none
    Title {
        /// Issue key
        key: String,

        /// Page title
        #[arg(value_parser = non_empty_string)]
        title: String,
    },

    /// Forget every issue (the lifetime count is kept)
    Clear,
}

#[derive(Subcommand)]
pub enum MappingCommand {
    /// List configured mappings
    List {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Map a prefix to a base URL
    #[command(after_help = colors::examples("\
Examples:
  qf mapping add ABC https://tracker.example.com/browse/         Map ABC
  qf mapping add web https://web.example.com/issues -p Website   Map WEB with a project name"))]
    Add {
        /// Key prefix (e.g. ABC)
        prefix: String,

        /// URL the key is appended to
        base_url: String,

        /// Project display name
        #[arg(long, short)]
        project: Option<String>,
    },

    /// Remove the mapping for a prefix
    Remove {
        /// Key prefix
        prefix: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write mappings and preferences as JSON
    Export {
        /// Destination file (stdout when omitted)
        file: Option<std::path::PathBuf>,
    },

    /// Replace mappings and preferences from exported JSON
    Import {
        /// Source file (`-` for stdin)
        file: String,
    },

    /// Show or set the theme
    Theme {
        #[arg(value_enum)]
        theme: Option<ThemeArg>,
    },

    /// Show or set the smart-links preference
    SmartLinks {
        #[arg(value_enum)]
        state: Option<Toggle>,
    },
}

#[derive(Subcommand)]
pub enum RemindCommand {
    /// Schedule a reminder for an issue
    #[command(after_help = colors::examples("\
Examples:
  qf remind add ABC-1 30m                  Remind in 30 minutes
  qf remind add ABC-1 2h --repeat 3        Remind in 2 hours, then 3 more times
  qf remind add ABC-1 2026-05-01T09:00:00Z --note \"standup\""))]
    Add {
        /// Issue key
        key: String,

        /// When: minutes from now (30m, 2h, 1d) or an RFC 3339 time
        at: String,

        /// Title shown with the reminder
        #[arg(long, short)]
        title: Option<String>,

        /// Note shown as the reminder message
        #[arg(long, short)]
        note: Option<String>,

        /// Extra reminders, one minute apart, after the first
        #[arg(long, short, default_value_t = 0)]
        repeat: u32,
    },

    /// Cancel the reminder for an issue
    Clear {
        /// Issue key
        key: String,
    },

    /// List scheduled reminders, soonest first
    List {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Fire every reminder that is due
    Tick,
}
