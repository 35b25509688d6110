// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal errors and warnings on stderr.
//!
//! Every diagnostic is exactly one line, whatever the underlying error
//! renders as, so wrappers can grep the harness output line by line.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    Error,
    Warning,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Error => "Error",
            Level::Warning => "Warning",
        }
    }

    /// SGR color code used on a terminal.
    fn color(self) -> u8 {
        match self {
            Level::Error => 31,
            Level::Warning => 33,
        }
    }
}

/// Flatten a message onto one line: trimmed lines joined by a space.
pub fn one_line(msg: impl Display) -> String {
    msg.to_string()
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Report a fatal error. Red on a terminal.
pub fn print_error(msg: impl Display) {
    emit(Level::Error, msg);
}

/// Report a non-fatal condition. Yellow on a terminal.
pub fn print_warning(msg: impl Display) {
    emit(Level::Warning, msg);
}

fn emit(level: Level, msg: impl Display) {
    let stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    write_diagnostic(&mut stderr.lock(), level, msg, is_tty);
}

fn write_diagnostic<W: Write>(writer: &mut W, level: Level, msg: impl Display, color: bool) {
    let text = one_line(msg);
    let _ = if color {
        writeln!(writer, "\x1b[{}m{}: {}\x1b[0m", level.color(), level.label(), text)
    } else {
        writeln!(writer, "{}: {}", level.label(), text)
    };
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
