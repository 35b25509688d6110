// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["pathcheck"]).unwrap();
    assert_eq!(cli.srcdir, None);
    assert_eq!(cli.output_format, OutputFormat::Text);
    assert!(!cli.verbose);
}

#[test]
fn test_overrides() {
    let cli = Cli::try_parse_from([
        "pathcheck",
        "--srcdir",
        "/src",
        "--fixture",
        "/tmp/x.tests",
        "--root",
        "/tmp/root",
        "--lens-path",
        "/a:/b",
        "--filter",
        "hosts",
        "--output-format",
        "json",
        "-v",
    ])
    .unwrap();

    assert_eq!(cli.srcdir, Some(PathBuf::from("/src")));
    assert_eq!(cli.fixture, Some(PathBuf::from("/tmp/x.tests")));
    assert_eq!(cli.root, Some(PathBuf::from("/tmp/root")));
    assert_eq!(cli.lens_path.as_deref(), Some("/a:/b"));
    assert_eq!(cli.filter.as_deref(), Some("hosts"));
    assert_eq!(cli.output_format, OutputFormat::Json);
    assert!(cli.verbose);
}

#[test]
fn test_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["pathcheck", "--output-format", "xml"]).is_err());
}
