// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[test]
#[serial]
fn srcdir_returns_none_when_unset() {
    std::env::remove_var(ABS_TOP_SRCDIR);
    assert_eq!(srcdir(), None);
}

#[test]
#[serial]
fn srcdir_returns_path_when_set() {
    std::env::set_var(ABS_TOP_SRCDIR, "/tmp/src");
    let result = srcdir();
    std::env::remove_var(ABS_TOP_SRCDIR);
    assert_eq!(result, Some(PathBuf::from("/tmp/src")));
}

#[test]
#[serial]
fn srcdir_ignores_empty_value() {
    std::env::set_var(ABS_TOP_SRCDIR, "");
    let result = srcdir();
    std::env::remove_var(ABS_TOP_SRCDIR);
    assert_eq!(result, None);
}

#[test]
#[serial]
fn log_filter_returns_directive_when_set() {
    std::env::set_var(PATHCHECK_LOG, "pathcheck=trace");
    let result = log_filter();
    std::env::remove_var(PATHCHECK_LOG);
    assert_eq!(result.as_deref(), Some("pathcheck=trace"));
}

#[test]
#[serial]
fn log_filter_returns_none_when_unset() {
    std::env::remove_var(PATHCHECK_LOG);
    assert_eq!(log_filter(), None);
}
