// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Run path-query fixtures against a tree backend
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "pathcheck", version, about = "Run path-query fixtures against a tree backend")]
pub struct Cli {
    /// Base directory; defaults to $abs_top_srcdir.
    /// Fixture, root and lens paths are derived from it unless overridden.
    #[arg(long, value_name = "DIR")]
    pub srcdir: Option<PathBuf>,

    /// Fixture file (default: <srcdir>/tests/xpath.tests)
    #[arg(long, value_name = "FILE")]
    pub fixture: Option<PathBuf>,

    /// Backend root directory (default: <srcdir>/tests/root)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Colon-separated lens search path (default: <srcdir>/lenses)
    #[arg(long, value_name = "DIRS")]
    pub lens_path: Option<String>,

    /// Only run tests whose name contains this string
    #[arg(long)]
    pub filter: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Report format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
