// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tree-query backend interface.
//!
//! The runner only needs two calls from a backend: evaluate a path query to
//! an ordered list of node identifiers, and fetch the value stored at one
//! identifier. Result order is part of the backend's contract; fixtures pair
//! expected entries with results by position.

pub mod replay;

use std::ops::{Deref, DerefMut};
use thiserror::Error;

pub use replay::ReplayBackend;

/// The backend session could not be opened.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("root directory '{0}' does not exist")]
    MissingRoot(String),

    #[error("lens directory '{0}' does not exist")]
    MissingLensDir(String),

    #[error("Failed to read tree store '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse tree store at line {line}, column {column}: {message}")]
    Toml {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Invalid tree store: {0}")]
    Validation(String),
}

/// Evaluating a query failed outright (as opposed to matching nothing).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("query '{query}' failed: {reason}")]
pub struct QueryError {
    pub query: String,
    pub reason: String,
}

/// Fetching the value of one node failed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("no node matches '{0}'")]
    NoMatch(String),

    #[error("'{0}' matches {1} nodes")]
    Ambiguous(String, usize),
}

/// Flags passed when opening a backend session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenFlags {
    /// Search only the given lens path, not the backend's built-in one.
    pub no_stdinc: bool,
    /// Write changes to `<file>.augnew` instead of overwriting.
    pub save_newfile: bool,
}

impl OpenFlags {
    /// Flags used by the conformance runner.
    pub const CONFORMANCE: OpenFlags = OpenFlags {
        no_stdinc: true,
        save_newfile: true,
    };
}

/// An open tree-query session.
pub trait Backend {
    /// Evaluate `query`, returning matching node identifiers in backend order.
    fn matches(&mut self, query: &str) -> Result<Vec<String>, QueryError>;

    /// Fetch the value stored at `path`. `Ok(None)` means the node has no value.
    fn get(&mut self, path: &str) -> Result<Option<String>, LookupError>;

    /// Release the session. Called once, by [`Session`].
    fn close(&mut self);
}

/// Owns an open backend and closes it exactly once when dropped.
pub struct Session<B: Backend> {
    backend: B,
}

impl<B: Backend> Session<B> {
    pub fn new(backend: B) -> Self {
        tracing::debug!("backend session opened");
        Self { backend }
    }
}

impl<B: Backend> Deref for Session<B> {
    type Target = B;

    fn deref(&self) -> &B {
        &self.backend
    }
}

impl<B: Backend> DerefMut for Session<B> {
    fn deref_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: Backend> Drop for Session<B> {
    fn drop(&mut self) {
        self.backend.close();
        tracing::debug!("backend session closed");
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
