// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for running the pathcheck binary against a scratch srcdir.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Recorded hosts tree used by most tests.
pub const HOSTS_STORE: &str = r#"
[[node]]
path = "/files/etc/hosts/1"

[[node]]
path = "/files/etc/hosts/1/ipaddr"
value = "127.0.0.1"

[[node]]
path = "/files/etc/hosts/1/canonical"
value = "localhost"

[[node]]
path = "/files/etc/hosts/2"

[[node]]
path = "/files/etc/hosts/2/ipaddr"
value = "192.168.0.1"

[[node]]
path = "/files/etc/hosts/2/canonical"
value = "router"

[[query]]
expr = "/files/etc/hosts/*[ipaddr = '127.0.0.1']"
matches = ["/files/etc/hosts/1"]

[[query]]
expr = "/files/etc/hosts["
error = "unmatched ["
"#;

/// A srcdir with `tests/xpath.tests`, `tests/root/tree.toml` and `lenses/`.
pub struct Srcdir {
    pub dir: TempDir,
}

impl Srcdir {
    pub fn new(fixture: &str) -> Self {
        Self::with_store(fixture, HOSTS_STORE)
    }

    pub fn with_store(fixture: &str, store: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let base = dir.path();
        fs::create_dir_all(base.join("tests/root")).unwrap();
        fs::create_dir_all(base.join("lenses")).unwrap();
        fs::write(base.join("tests/xpath.tests"), fixture).unwrap();
        fs::write(base.join("tests/root/tree.toml"), store).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Run the binary with `abs_top_srcdir` pointing here.
    pub fn run(&self, args: &[&str]) -> Output {
        pathcheck()
            .env("abs_top_srcdir", self.dir.path())
            .args(args)
            .output()
            .expect("Failed to run pathcheck")
    }
}

/// Command for the built binary with a clean environment for its variables.
pub fn pathcheck() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pathcheck"));
    cmd.env_remove("abs_top_srcdir").env_remove("PATHCHECK_LOG");
    cmd
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
