// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture-driven conformance runner for tree path queries.
//!
//! Reads a fixture of named queries with their expected results, runs each
//! query against a backend session, and reports a verdict per test:
//!
//! 1. [`fixture`] parses the whole file up front; a malformed line aborts
//!    the run before the backend is touched.
//! 2. [`backend`] opens one session, closed again when the run ends.
//! 3. [`runner`] evaluates tests one at a time, in file order.
//! 4. [`report`] renders each verdict as it is produced and folds them into
//!    the exit status.

pub mod backend;
pub mod cli;
pub mod env;
pub mod fixture;
pub mod layout;
pub mod logging;
pub mod output_diagnostic;
pub mod report;
pub mod runner;

#[cfg(test)]
mod test_helpers;

use backend::{InitError, OpenFlags, ReplayBackend, Session};
use cli::Cli;
use fixture::{Fixture, FixtureError};
use layout::Layout;
use report::{ExitStatus, Reporter};
use std::io::Write;
use thiserror::Error;

/// Errors that stop a run before or outside of test evaluation.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("env var {} must be set (or pass --srcdir)", env::ABS_TOP_SRCDIR)]
    MissingSrcdir,

    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error("Failed to open backend: {0}")]
    Init(#[from] InitError),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the fixture described by `cli`, writing the report to `out`.
///
/// The fixture is parsed before the backend session is opened; the session
/// is closed on every path out of this function once it exists.
pub fn execute<W: Write>(cli: &Cli, out: W) -> Result<ExitStatus, RunError> {
    let srcdir = cli.srcdir.clone().or_else(env::srcdir);
    let layout = Layout::resolve(cli, srcdir.as_deref()).ok_or(RunError::MissingSrcdir)?;

    let mut fixture = Fixture::load(&layout.fixture)?;
    if let Some(filter) = &cli.filter {
        fixture = fixture.select(filter);
        if fixture.is_empty() {
            output_diagnostic::print_warning(format!("no tests match '{}'", filter));
        }
    }

    let backend = ReplayBackend::open(&layout.root, &layout.lens_path, OpenFlags::CONFORMANCE)?;
    let mut session = Session::new(backend);

    let mut reporter = Reporter::new(out, cli.output_format);
    for test in &fixture {
        let verdict = runner::check(&mut *session, test);
        reporter.report(&verdict)?;
    }
    Ok(reporter.finish()?)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
