// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pathcheck binary entry point.

use clap::Parser;

use pathcheck::cli::Cli;
use pathcheck::output_diagnostic::print_error;
use pathcheck::report::exit_codes;

fn main() {
    let cli = Cli::parse();
    pathcheck::logging::init(cli.verbose);

    let stdout = std::io::stdout();
    match pathcheck::execute(&cli, stdout.lock()) {
        Ok(status) => std::process::exit(status.code()),
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::FATAL);
        }
    }
}
