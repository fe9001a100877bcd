// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `qf parse` and `qf suggest`: read-only views of the keys in text.

use qf_core::{parse_keys, suggest, MappingResolver, Store, Suggestion};
use serde::Serialize;

use super::{open_store, print_json, read_text};
use crate::cli::{OutputFormat, TextArgs};
use crate::display::format_suggestion;
use crate::error::Result;

pub fn parse(args: &TextArgs, output: OutputFormat) -> Result<()> {
    let text = read_text(args)?;
    let keys: Vec<String> = parse_keys(&text).into_iter().map(String::from).collect();
    match output {
        OutputFormat::Text => {
            for key in &keys {
                println!("{}", key);
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&keys),
    }
}

#[derive(Serialize)]
struct SuggestionJson<'a> {
    key: &'a str,
    url: Option<&'a str>,
}

pub fn suggest_keys(args: &TextArgs, output: OutputFormat) -> Result<()> {
    let text = read_text(args)?;
    let (store, _) = open_store()?;
    let suggestions = suggestions_impl(&store, &text)?;
    match output {
        OutputFormat::Text => {
            for s in &suggestions {
                println!("{}", format_suggestion(s));
            }
            Ok(())
        }
        OutputFormat::Json => {
            let rows: Vec<SuggestionJson> = suggestions
                .iter()
                .map(|s| SuggestionJson {
                    key: s.key.as_str(),
                    url: s.url.as_deref(),
                })
                .collect();
            print_json(&rows)
        }
    }
}

pub(crate) fn suggestions_impl(store: &dyn Store, text: &str) -> Result<Vec<Suggestion>> {
    let mappings = MappingResolver::new(store).load()?;
    Ok(suggest(&mappings, text))
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
