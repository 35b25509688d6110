// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log setup. Logs go to stderr so stdout carries only the report.

use crate::env;
use tracing_subscriber::EnvFilter;

/// Filter used when nothing else is configured.
pub const DEFAULT_FILTER: &str = "warn";

/// Filter used with `--verbose`.
pub const VERBOSE_FILTER: &str = "debug";

/// Pick the filter directive: `--verbose` wins, then `PATHCHECK_LOG`.
pub fn filter_directive(verbose: bool, from_env: Option<&str>) -> &str {
    match (verbose, from_env) {
        (true, _) => VERBOSE_FILTER,
        (false, Some(directive)) => directive,
        (false, None) => DEFAULT_FILTER,
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let from_env = env::log_filter();
    let directive = filter_directive(verbose, from_env.as_deref());
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
