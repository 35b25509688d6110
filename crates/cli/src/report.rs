// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verdict rendering and exit status aggregation.

use crate::cli::OutputFormat;
use crate::fixture::{Entry, ExpectedValue, UNCHECKED};
use crate::runner::{ActualEntry, Mismatch, MismatchKind, Verdict};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;

/// Width the test name is padded to on the status line.
const NAME_WIDTH: usize = 30;

/// Exit codes for the runner binary
pub mod exit_codes {
    /// Every test passed
    pub const SUCCESS: i32 = 0;
    /// At least one test failed
    pub const FAILURE: i32 = 1;
    /// The run could not start (bad fixture, backend init, missing config)
    pub const FATAL: i32 = 2;
}

/// Overall result of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    AllPass,
    Failure,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::AllPass => exit_codes::SUCCESS,
            ExitStatus::Failure => exit_codes::FAILURE,
        }
    }
}

/// `AllPass` iff every verdict passed.
pub fn aggregate(verdicts: &[Verdict]) -> ExitStatus {
    Summary::from_verdicts(verdicts).status()
}

/// Pass/fail counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_verdicts(verdicts: &[Verdict]) -> Self {
        let mut summary = Summary::default();
        for verdict in verdicts {
            summary.record(verdict);
        }
        summary
    }

    pub fn record(&mut self, verdict: &Verdict) {
        self.total += 1;
        if verdict.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn status(&self) -> ExitStatus {
        if self.failed == 0 {
            ExitStatus::AllPass
        } else {
            ExitStatus::Failure
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} tests, {} passed, {} failed",
            self.total, self.passed, self.failed
        )
    }
}

/// Render one verdict as text.
///
/// A pass is a single status line. A failure adds the query, the expected
/// entries, the actual results (or the backend error), and one line per
/// positional mismatch.
pub fn render(verdict: &Verdict) -> String {
    let mut out = String::new();
    let status = if verdict.passed { "PASS" } else { "FAIL" };
    let _ = writeln!(out, "{:<width$} ... {}", verdict.test_name, status, width = NAME_WIDTH);
    if verdict.passed {
        return out;
    }

    let _ = writeln!(out, "  Match: {}", verdict.query);
    let _ = writeln!(out, "  Expected: {} entries", verdict.expected_count);
    for entry in &verdict.expected {
        let _ = writeln!(out, "    {}", expected_line(entry));
    }

    match (&verdict.query_error, verdict.actual_count) {
        (Some(reason), _) => {
            let _ = writeln!(out, "  Actual: query failed: {}", reason);
        }
        (None, Some(count)) => {
            let _ = writeln!(out, "  Actual: {} entries", count);
        }
        (None, None) => {
            let _ = writeln!(out, "  Actual: query failed");
        }
    }
    for actual in &verdict.actual {
        let _ = writeln!(out, "    {}", actual_line(actual));
    }

    for mismatch in &verdict.mismatches {
        let _ = writeln!(out, "  {}", mismatch_line(mismatch));
    }
    out
}

fn expected_line(entry: &Entry) -> String {
    match &entry.value {
        ExpectedValue::Absent => entry.path.clone(),
        ExpectedValue::Unchecked => format!("{} = {}", entry.path, UNCHECKED),
        ExpectedValue::Literal(value) => format!("{} = {}", entry.path, value),
    }
}

fn actual_line(actual: &ActualEntry) -> String {
    match &actual.value {
        Some(value) => format!("{} = {}", actual.path, value),
        None => actual.path.clone(),
    }
}

fn describe_value(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("'{}'", v),
        None => "no value".to_string(),
    }
}

fn expected_value(entry: &Entry) -> String {
    match &entry.value {
        ExpectedValue::Literal(v) => describe_value(Some(v)),
        _ => describe_value(None),
    }
}

fn mismatch_line(m: &Mismatch) -> String {
    let path = format!("expected path {}, got {}", m.expected.path, m.actual_path);
    let value = format!(
        "expected {}, got {}",
        expected_value(&m.expected),
        describe_value(m.actual_value.as_deref())
    );
    match m.kind {
        MismatchKind::Path => format!("Mismatch at {}: {}", m.position, path),
        MismatchKind::Value => format!("Mismatch at {} ({}): {}", m.position, m.actual_path, value),
        MismatchKind::PathAndValue => format!("Mismatch at {}: {}; {}", m.position, path, value),
    }
}

#[derive(Serialize)]
struct SummaryRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    #[serde(flatten)]
    summary: &'a Summary,
}

#[derive(Serialize)]
struct VerdictRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    #[serde(flatten)]
    verdict: &'a Verdict,
}

/// Streams verdicts to a writer in the configured format and keeps the tally.
pub struct Reporter<W: Write> {
    writer: W,
    format: OutputFormat,
    summary: Summary,
}

impl<W: Write> Reporter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer,
            format,
            summary: Summary::default(),
        }
    }

    /// Write one verdict.
    pub fn report(&mut self, verdict: &Verdict) -> std::io::Result<()> {
        self.summary.record(verdict);
        match self.format {
            OutputFormat::Text => self.writer.write_all(render(verdict).as_bytes()),
            OutputFormat::Json => {
                let record = VerdictRecord {
                    record_type: "verdict",
                    verdict,
                };
                writeln!(self.writer, "{}", serde_json::to_string(&record)?)
            }
        }
    }

    /// Write the summary and return the aggregated status.
    pub fn finish(mut self) -> std::io::Result<ExitStatus> {
        match self.format {
            OutputFormat::Text => writeln!(self.writer, "{}", self.summary)?,
            OutputFormat::Json => {
                let record = SummaryRecord {
                    record_type: "summary",
                    summary: &self.summary,
                };
                writeln!(self.writer, "{}", serde_json::to_string(&record)?)?
            }
        }
        self.writer.flush()?;
        Ok(self.summary.status())
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
