// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    default = { false, None, "warn" },
    from_env = { false, Some("pathcheck=trace"), "pathcheck=trace" },
    verbose = { true, None, "debug" },
    verbose_beats_env = { true, Some("error"), "debug" },
)]
fn picks_filter(verbose: bool, from_env: Option<&str>, expected: &str) {
    assert_eq!(filter_directive(verbose, from_env), expected);
}

#[test]
fn init_twice_does_not_panic() {
    init(false);
    init(true);
}
