// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All environment variables read by pathcheck are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

use std::path::PathBuf;

/// Base directory of the source tree under test.
pub const ABS_TOP_SRCDIR: &str = "abs_top_srcdir";

/// Log filter directive (`tracing_subscriber::EnvFilter` syntax).
pub const PATHCHECK_LOG: &str = "PATHCHECK_LOG";

/// `abs_top_srcdir`: base directory fixture and backend paths derive from.
pub fn srcdir() -> Option<PathBuf> {
    non_empty(ABS_TOP_SRCDIR).map(PathBuf::from)
}

/// `PATHCHECK_LOG`: log filter directive.
pub fn log_filter() -> Option<String> {
    non_empty(PATHCHECK_LOG)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
