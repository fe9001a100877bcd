// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue key recognition.
//!
//! An issue key is `PREFIX-NUMBER` where the prefix is a letter followed by
//! one or more letters or digits. Keys are always stored uppercase.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Upper bound on keys returned by a single [`parse_keys`] call.
pub const MAX_PARSED_KEYS: usize = 50;

// Hard-coded patterns, verified by the tests in key_tests.rs. Digits are
// ASCII only.
static KEY_SCAN_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"[A-Z][A-Z0-9]+-[0-9]+") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });
static KEY_EXACT_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^[A-Z][A-Z0-9]+-[0-9]+$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });
static PREFIX_EXACT_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^[A-Z][A-Z0-9]+$")
{
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// A canonical, uppercase issue key such as `ABC-123`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IssueKey(String);

impl IssueKey {
    /// Parses a single key, uppercasing it first. The whole input (after
    /// trimming) must be a key.
    pub fn parse(s: &str) -> Result<Self> {
        let upper = s.trim().to_uppercase();
        if KEY_EXACT_RE.is_match(&upper) {
            Ok(IssueKey(upper))
        } else {
            Err(Error::InvalidKey(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The project prefix (the part before the first `-`).
    pub fn prefix(&self) -> &str {
        // Canonical keys always contain a dash after at least two characters.
        extract_prefix(&self.0).unwrap_or(&self.0)
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for IssueKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        IssueKey::parse(s)
    }
}

impl TryFrom<String> for IssueKey {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        IssueKey::parse(&s)
    }
}

impl From<IssueKey> for String {
    fn from(key: IssueKey) -> Self {
        key.0
    }
}

impl AsRef<str> for IssueKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for IssueKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for IssueKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Extracts issue keys from arbitrary text.
///
/// The text is uppercased and scanned left to right for non-overlapping
/// matches. Order of appearance is kept, duplicates are kept, and at most
/// [`MAX_PARSED_KEYS`] keys are returned. No match is an empty result, not an
/// error.
pub fn parse_keys(raw: &str) -> Vec<IssueKey> {
    let upper = raw.to_uppercase();
    KEY_SCAN_RE
        .find_iter(&upper)
        .take(MAX_PARSED_KEYS)
        .map(|m| IssueKey(m.as_str().to_string()))
        .collect()
}

/// Returns the part of `key` before the first `-`, or `None` when there is no
/// dash or the dash is the first character.
pub fn extract_prefix(key: &str) -> Option<&str> {
    match key.find('-') {
        Some(i) if i > 0 => Some(&key[..i]),
        _ => None,
    }
}

/// Trim and uppercase a prefix.
pub fn normalize_prefix(prefix: &str) -> String {
    prefix.trim().to_uppercase()
}

/// Returns true if an already-normalized prefix has the shape keys use.
pub fn is_valid_prefix(prefix: &str) -> bool {
    PREFIX_EXACT_RE.is_match(prefix)
}

/// Trim a base URL and make it end in exactly one `/`. Empty input stays
/// empty.
pub fn normalize_base(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    format!("{}/", trimmed.trim_end_matches('/'))
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;
