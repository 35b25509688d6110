// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers: an in-memory backend that records every call.

#![allow(clippy::panic)]

use crate::backend::{Backend, LookupError, QueryError};
use crate::fixture::Fixture;
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

/// Scripted backend with call recording.
#[derive(Debug, Default)]
pub struct FakeBackend {
    answers: HashMap<String, Result<Vec<String>, String>>,
    values: HashMap<String, Result<Option<String>, LookupError>>,
    /// Every query passed to `matches`, in call order.
    pub queries: Vec<String>,
    /// Every path passed to `get`, in call order.
    pub lookups: Vec<String>,
    closes: Rc<Cell<usize>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `query` with `paths`.
    pub fn query(mut self, query: &str, paths: &[&str]) -> Self {
        self.answers.insert(
            query.to_string(),
            Ok(paths.iter().map(|p| p.to_string()).collect()),
        );
        self
    }

    /// Make `query` fail with `reason`.
    pub fn failing_query(mut self, query: &str, reason: &str) -> Self {
        self.answers
            .insert(query.to_string(), Err(reason.to_string()));
        self
    }

    /// Store `value` at `path`.
    pub fn value(mut self, path: &str, value: Option<&str>) -> Self {
        self.values
            .insert(path.to_string(), Ok(value.map(|v| v.to_string())));
        self
    }

    /// Make lookups of `path` fail.
    pub fn failing_lookup(mut self, path: &str) -> Self {
        self.values.insert(
            path.to_string(),
            Err(LookupError::Ambiguous(path.to_string(), 2)),
        );
        self
    }

    /// Shared counter of `close` calls, readable after the backend is dropped.
    pub fn close_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.closes)
    }
}

impl Backend for FakeBackend {
    fn matches(&mut self, query: &str) -> Result<Vec<String>, QueryError> {
        self.queries.push(query.to_string());
        match self.answers.get(query) {
            Some(Ok(paths)) => Ok(paths.clone()),
            Some(Err(reason)) => Err(QueryError {
                query: query.to_string(),
                reason: reason.clone(),
            }),
            None => Ok(Vec::new()),
        }
    }

    fn get(&mut self, path: &str) -> Result<Option<String>, LookupError> {
        self.lookups.push(path.to_string());
        self.values
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(LookupError::NoMatch(path.to_string())))
    }

    fn close(&mut self) {
        self.closes.set(self.closes.get() + 1);
    }
}

/// Parse fixture text, panicking on malformed input.
pub fn fixture(source: &str) -> Fixture {
    match Fixture::parse(source) {
        Ok(fixture) => fixture,
        Err(e) => panic!("bad test fixture: {e}"),
    }
}
