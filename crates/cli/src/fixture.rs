// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture file parser.
//!
//! A fixture is a line-oriented list of named queries, each followed by the
//! results the query is expected to produce, in order:
//!
//! ```text
//! # comment
//! test hosts /files/etc/hosts/*/canonical
//! /files/etc/hosts/1/canonical = localhost
//! /files/etc/hosts/2/canonical = ...
//! /files/etc/hosts/3/canonical
//! ```

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Keyword that opens a new test.
pub const TEST_KEYWORD: &str = "test";

/// Value marker meaning "an entry must exist here, but don't compare its value".
pub const UNCHECKED: &str = "...";

/// Why a fixture line was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormatErrorKind {
    #[error("entry appears before any `test` line")]
    EntryOutsideTest,

    #[error("`test` needs a name and a query")]
    MissingTestName,

    #[error("test declaration has no query")]
    MissingQuery,

    #[error("either list only a path or path = value")]
    ExpectedAssignment,

    #[error("junk at end of line")]
    JunkAfterValue,
}

/// A malformed fixture line. Fatal for the whole run.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("line {line}: {kind}: {content}")]
pub struct FormatError {
    /// 1-based line number.
    pub line: usize,
    /// The offending line, as written.
    pub content: String,
    pub kind: FormatErrorKind,
}

/// Errors from loading a fixture file.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Fixture has incorrect format: {0}")]
    Format(#[from] FormatError),
}

/// What an entry says about the value stored at its path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum ExpectedValue {
    /// No `=` given: the node must not carry a value.
    Absent,
    /// `= ...`: the value is never fetched or compared.
    Unchecked,
    /// `= text`: the value must be exactly `text` (possibly empty).
    Literal(String),
}

impl ExpectedValue {
    fn from_text(text: &str) -> Self {
        if text == UNCHECKED {
            ExpectedValue::Unchecked
        } else {
            ExpectedValue::Literal(text.to_string())
        }
    }

    /// Whether the backend value has to be looked up for comparison.
    pub fn is_checked(&self) -> bool {
        !matches!(self, ExpectedValue::Unchecked)
    }

    /// Whether an actual value satisfies this expectation.
    pub fn accepts(&self, actual: Option<&str>) -> bool {
        match self {
            ExpectedValue::Absent => actual.is_none(),
            ExpectedValue::Unchecked => true,
            ExpectedValue::Literal(expected) => actual == Some(expected.as_str()),
        }
    }
}

/// One expected query result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub path: String,
    pub value: ExpectedValue,
}

impl Entry {
    pub fn new(path: impl Into<String>, value: ExpectedValue) -> Self {
        Self {
            path: path.into(),
            value,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            ExpectedValue::Absent => write!(f, "{}", self.path),
            ExpectedValue::Unchecked => write!(f, "{} = {}", self.path, UNCHECKED),
            ExpectedValue::Literal(text) if text.is_empty() => write!(f, "{} =", self.path),
            ExpectedValue::Literal(text) => write!(f, "{} = {}", self.path, text),
        }
    }
}

/// A named query and the entries it should produce.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Test {
    pub name: String,
    pub query: String,
    pub entries: Vec<Entry>,
}

impl fmt::Display for Test {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} {}", TEST_KEYWORD, self.name, self.query)?;
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// A parsed fixture: tests in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Fixture {
    tests: Vec<Test>,
}

impl Fixture {
    /// Parse fixture text.
    pub fn parse(source: &str) -> Result<Self, FormatError> {
        parse(source)
    }

    /// Read and parse a fixture file.
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let source = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fixture = parse(&source)?;
        tracing::debug!(path = %path.display(), tests = fixture.len(), "loaded fixture");
        Ok(fixture)
    }

    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Test> {
        self.tests.iter()
    }

    /// Keep only the tests whose name contains `filter`.
    pub fn select(&self, filter: &str) -> Fixture {
        Fixture {
            tests: self
                .tests
                .iter()
                .filter(|t| t.name.contains(filter))
                .cloned()
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Fixture {
    type Item = &'a Test;
    type IntoIter = std::slice::Iter<'a, Test>;

    fn into_iter(self) -> Self::IntoIter {
        self.tests.iter()
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for test in &self.tests {
            write!(f, "{}", test)?;
        }
        Ok(())
    }
}

enum Line {
    Test { name: String, query: String },
    Entry(Entry),
}

/// Parse fixture text into tests.
///
/// Entries attach to the most recently declared test; the index of that
/// test is threaded through the loop instead of kept as parser state.
pub fn parse(source: &str) -> Result<Fixture, FormatError> {
    let mut tests: Vec<Test> = Vec::new();
    let mut current: Option<usize> = None;

    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim_start();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let lineno = idx + 1;
        match parse_line(line).map_err(|kind| format_error(lineno, raw, kind))? {
            Line::Test { name, query } => {
                tests.push(Test {
                    name,
                    query,
                    entries: Vec::new(),
                });
                current = Some(tests.len() - 1);
            }
            Line::Entry(entry) => match current {
                Some(i) => tests[i].entries.push(entry),
                None => {
                    return Err(format_error(
                        lineno,
                        raw,
                        FormatErrorKind::EntryOutsideTest,
                    ))
                }
            },
        }
    }

    Ok(Fixture { tests })
}

fn format_error(line: usize, content: &str, kind: FormatErrorKind) -> FormatError {
    FormatError {
        line,
        content: content.to_string(),
        kind,
    }
}

fn parse_line(line: &str) -> Result<Line, FormatErrorKind> {
    if let Some(rest) = strip_keyword(line) {
        return parse_test_header(rest);
    }
    parse_entry(line).map(Line::Entry)
}

/// `test` followed by whitespace (or nothing) opens a test; `testing` does not.
fn strip_keyword(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(TEST_KEYWORD)?;
    (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some(rest)
}

fn parse_test_header(rest: &str) -> Result<Line, FormatErrorKind> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(FormatErrorKind::MissingTestName);
    }
    let (name, query) = rest
        .split_once(char::is_whitespace)
        .ok_or(FormatErrorKind::MissingQuery)?;
    Ok(Line::Test {
        name: name.to_string(),
        query: query.trim_start().to_string(),
    })
}

fn parse_entry(line: &str) -> Result<Entry, FormatErrorKind> {
    let (path, rest) = match line.find(char::is_whitespace) {
        Some(end) => line.split_at(end),
        None => (line, ""),
    };

    let rest = rest.trim_start();
    if rest.is_empty() {
        return Ok(Entry::new(path, ExpectedValue::Absent));
    }

    let value = rest
        .strip_prefix('=')
        .ok_or(FormatErrorKind::ExpectedAssignment)?
        .trim();
    if value.starts_with('=') {
        return Err(FormatErrorKind::JunkAfterValue);
    }
    Ok(Entry::new(path, ExpectedValue::from_text(value)))
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
