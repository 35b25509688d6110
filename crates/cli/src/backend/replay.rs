// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Replay backend: serves a recorded tree from `<root>/tree.toml`.
//!
//! ```toml
//! [[node]]
//! path = "/files/etc/hosts/1/ipaddr"
//! value = "127.0.0.1"
//!
//! [[query]]
//! expr = "/files/etc/hosts/*[ipaddr = '127.0.0.1']"
//! matches = ["/files/etc/hosts/1"]
//!
//! [[query]]
//! expr = "/files/etc/hosts["
//! error = "unmatched ["
//! ```
//!
//! Recorded queries are answered verbatim. Any other query is treated as a
//! glob over node paths (`*` stops at `/`), answered in document order.

use super::{Backend, InitError, LookupError, OpenFlags, QueryError};
use glob::{MatchOptions, Pattern};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Name of the store file inside the root directory.
pub const STORE_FILE: &str = "tree.toml";

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// On-disk store layout
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TreeStore {
    #[serde(default, rename = "node")]
    nodes: Vec<NodeSpec>,

    #[serde(default, rename = "query")]
    queries: Vec<QuerySpec>,
}

/// A node in the recorded tree
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSpec {
    pub path: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// A recorded query answer: either `matches` or `error`
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuerySpec {
    pub expr: String,
    #[serde(default)]
    pub matches: Option<Vec<String>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug)]
enum Answer {
    Matches(Vec<String>),
    Error(String),
}

/// Backend answering from a recorded tree.
#[derive(Debug)]
pub struct ReplayBackend {
    nodes: Vec<NodeSpec>,
    answers: HashMap<String, Answer>,
    flags: OpenFlags,
    closed: bool,
}

impl ReplayBackend {
    /// Open the store under `root`.
    ///
    /// `lens_path` is a `:`-separated list of directories, each of which
    /// must exist.
    pub fn open(root: &Path, lens_path: &str, flags: OpenFlags) -> Result<Self, InitError> {
        if !root.is_dir() {
            return Err(InitError::MissingRoot(root.display().to_string()));
        }
        for dir in lens_path.split(':').filter(|d| !d.is_empty()) {
            if !Path::new(dir).is_dir() {
                return Err(InitError::MissingLensDir(dir.to_string()));
            }
        }

        let store = root.join(STORE_FILE);
        let content = std::fs::read_to_string(&store).map_err(|source| InitError::Io {
            path: store.display().to_string(),
            source,
        })?;
        let backend = Self::from_toml(&content, flags)?;
        tracing::debug!(
            root = %root.display(),
            lens_path,
            flags = ?backend.flags(),
            nodes = backend.nodes.len(),
            queries = backend.answers.len(),
            "opened replay backend"
        );
        Ok(backend)
    }

    /// Build a backend from store text.
    pub fn from_toml(content: &str, flags: OpenFlags) -> Result<Self, InitError> {
        let store: TreeStore =
            toml::from_str(content).map_err(|e| toml_error(content, &e))?;
        Self::from_specs(store.nodes, store.queries, flags)
    }

    /// Build a backend from already-parsed nodes and recorded queries.
    pub fn from_specs(
        nodes: Vec<NodeSpec>,
        queries: Vec<QuerySpec>,
        flags: OpenFlags,
    ) -> Result<Self, InitError> {
        for node in &nodes {
            if !node.path.starts_with('/') {
                return Err(InitError::Validation(format!(
                    "node path '{}' must start with '/'",
                    node.path
                )));
            }
        }

        let mut answers = HashMap::new();
        for query in queries {
            let answer = match (query.matches, query.error) {
                (Some(matches), None) => Answer::Matches(matches),
                (None, Some(reason)) => Answer::Error(reason),
                _ => {
                    return Err(InitError::Validation(format!(
                        "query '{}' needs exactly one of `matches` or `error`",
                        query.expr
                    )))
                }
            };
            if answers.insert(query.expr.clone(), answer).is_some() {
                return Err(InitError::Validation(format!(
                    "query '{}' is recorded twice",
                    query.expr
                )));
            }
        }

        Ok(Self {
            nodes,
            answers,
            flags,
            closed: false,
        })
    }

    pub fn flags(&self) -> OpenFlags {
        self.flags
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn glob(&self, query: &str) -> Result<Vec<String>, QueryError> {
        let pattern = Pattern::new(query).map_err(|e| QueryError {
            query: query.to_string(),
            reason: e.to_string(),
        })?;
        Ok(self
            .nodes
            .iter()
            .filter(|node| pattern.matches_with(&node.path, GLOB_OPTIONS))
            .map(|node| node.path.clone())
            .collect())
    }
}

/// Flatten a TOML error to its message and 1-based position.
fn toml_error(content: &str, err: &toml::de::Error) -> InitError {
    let offset = err.span().map_or(0, |span| span.start.min(content.len()));
    let before = content.get(..offset).unwrap_or(content);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    InitError::Toml {
        line,
        column,
        message: err.message().split_whitespace().collect::<Vec<_>>().join(" "),
    }
}

impl Backend for ReplayBackend {
    fn matches(&mut self, query: &str) -> Result<Vec<String>, QueryError> {
        match self.answers.get(query) {
            Some(Answer::Matches(paths)) => Ok(paths.clone()),
            Some(Answer::Error(reason)) => Err(QueryError {
                query: query.to_string(),
                reason: reason.clone(),
            }),
            None => self.glob(query),
        }
    }

    fn get(&mut self, path: &str) -> Result<Option<String>, LookupError> {
        let mut found = self.nodes.iter().filter(|node| node.path == path);
        match (found.next(), found.count()) {
            (None, _) => Err(LookupError::NoMatch(path.to_string())),
            (Some(node), 0) => Ok(node.value.clone()),
            (Some(_), rest) => Err(LookupError::Ambiguous(path.to_string(), rest + 1)),
        }
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
#[path = "replay_tests.rs"]
mod tests;
