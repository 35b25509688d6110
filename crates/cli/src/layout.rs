// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Where the fixture, backend root and lens search path live.

use crate::cli::Cli;
use std::path::{Path, PathBuf};

/// Fixture file relative to the base directory.
pub const FIXTURE_FILE: &str = "tests/xpath.tests";
/// Backend root relative to the base directory.
pub const ROOT_DIR: &str = "tests/root";
/// Lens directory relative to the base directory.
pub const LENS_DIR: &str = "lenses";

/// Resolved input locations for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub fixture: PathBuf,
    pub root: PathBuf,
    pub lens_path: String,
}

impl Layout {
    /// Default locations under `srcdir`.
    pub fn from_srcdir(srcdir: &Path) -> Self {
        Self {
            fixture: srcdir.join(FIXTURE_FILE),
            root: srcdir.join(ROOT_DIR),
            lens_path: srcdir.join(LENS_DIR).display().to_string(),
        }
    }

    /// Resolve locations from CLI overrides, falling back to `srcdir`.
    ///
    /// `srcdir` is only required for locations not given explicitly.
    /// Returns `None` when one is needed but missing.
    pub fn resolve(cli: &Cli, srcdir: Option<&Path>) -> Option<Self> {
        let defaults = srcdir.map(Self::from_srcdir);
        let defaults = defaults.as_ref();

        let fixture = cli
            .fixture
            .clone()
            .or_else(|| defaults.map(|l| l.fixture.clone()))?;
        let root = cli
            .root
            .clone()
            .or_else(|| defaults.map(|l| l.root.clone()))?;
        let lens_path = cli
            .lens_path
            .clone()
            .or_else(|| defaults.map(|l| l.lens_path.clone()))?;

        Some(Self {
            fixture,
            root,
            lens_path,
        })
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
