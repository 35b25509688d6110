// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Case runner: evaluates each test against a backend and compares the
//! results with the expected entries.
//!
//! Entries are paired with results by position. A count mismatch fails the
//! test without any positional comparison.

use crate::backend::Backend;
use crate::fixture::{Entry, Fixture, Test};
use serde::Serialize;
use tracing::{debug, warn};

/// One query result as reported back in a failed verdict.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActualEntry {
    pub path: String,
    pub value: Option<String>,
}

/// What differed between an entry and the result at the same position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchKind {
    Path,
    Value,
    PathAndValue,
}

/// A positional discrepancy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// 1-based position within the test.
    pub position: usize,
    pub kind: MismatchKind,
    pub expected: Entry,
    pub actual_path: String,
    /// Value fetched for `actual_path`; `None` when absent or not checked.
    pub actual_value: Option<String>,
}

/// Outcome of one test.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub test_name: String,
    pub query: String,
    pub passed: bool,
    pub expected_count: usize,
    /// `None` when the query itself failed.
    pub actual_count: Option<usize>,
    /// Backend error message when the query failed.
    pub query_error: Option<String>,
    pub expected: Vec<Entry>,
    /// Results with their values; only collected for failed tests.
    pub actual: Vec<ActualEntry>,
    pub mismatches: Vec<Mismatch>,
}

impl Verdict {
    fn pending(test: &Test) -> Self {
        Self {
            test_name: test.name.clone(),
            query: test.query.clone(),
            passed: false,
            expected_count: test.entries.len(),
            actual_count: None,
            query_error: None,
            expected: test.entries.clone(),
            actual: Vec::new(),
            mismatches: Vec::new(),
        }
    }

    pub fn query_failed(&self) -> bool {
        self.query_error.is_some()
    }

    pub fn count_matches(&self) -> bool {
        self.actual_count == Some(self.expected_count)
    }
}

/// Run every test in order and collect the verdicts.
///
/// Callers that report as they go call [`check`] per test instead.
pub fn run<B: Backend + ?Sized>(backend: &mut B, fixture: &Fixture) -> Vec<Verdict> {
    fixture.iter().map(|test| check(&mut *backend, test)).collect()
}

/// Evaluate a single test.
pub fn check<B: Backend + ?Sized>(backend: &mut B, test: &Test) -> Verdict {
    let mut verdict = Verdict::pending(test);
    debug!(test = %test.name, query = %test.query, "running test");

    let paths = match backend.matches(&test.query) {
        Ok(paths) => paths,
        Err(e) => {
            warn!(test = %test.name, error = %e, "query failed");
            verdict.query_error = Some(e.reason);
            return verdict;
        }
    };

    verdict.actual_count = Some(paths.len());
    if verdict.count_matches() {
        verdict.mismatches = compare(backend, &test.entries, &paths);
        verdict.passed = verdict.mismatches.is_empty();
    } else {
        debug!(
            test = %test.name,
            expected = verdict.expected_count,
            actual = paths.len(),
            "result count differs"
        );
    }

    if !verdict.passed {
        verdict.actual = paths
            .into_iter()
            .map(|path| {
                let value = lookup(backend, &path);
                ActualEntry { path, value }
            })
            .collect();
    }

    debug!(test = %test.name, passed = verdict.passed, "test finished");
    verdict
}

fn compare<B: Backend + ?Sized>(backend: &mut B, entries: &[Entry], paths: &[String]) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();

    for (idx, (entry, path)) in entries.iter().zip(paths).enumerate() {
        let path_ok = entry.path == *path;
        let (value_ok, actual_value) = if entry.value.is_checked() {
            let actual = lookup(backend, path);
            (entry.value.accepts(actual.as_deref()), actual)
        } else {
            (true, None)
        };

        let kind = match (path_ok, value_ok) {
            (true, true) => continue,
            (false, true) => MismatchKind::Path,
            (true, false) => MismatchKind::Value,
            (false, false) => MismatchKind::PathAndValue,
        };
        mismatches.push(Mismatch {
            position: idx + 1,
            kind,
            expected: entry.clone(),
            actual_path: path.clone(),
            actual_value,
        });
    }

    mismatches
}

/// Fetch a value, treating lookup failures as "no value".
fn lookup<B: Backend + ?Sized>(backend: &mut B, path: &str) -> Option<String> {
    match backend.get(path) {
        Ok(value) => value,
        Err(e) => {
            debug!(path, error = %e, "lookup failed, treating as no value");
            None
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
