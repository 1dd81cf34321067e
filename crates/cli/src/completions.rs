// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion scripts for kwscan.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Binary name completions are generated for.
pub const BIN_NAME: &str = "kwscan";

/// Write the completion script for `shell` to `out`.
pub fn write_script<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}

/// Print the completion script for `shell` to stdout.
pub fn print_script(shell: Shell) {
    write_script(shell, &mut std::io::stdout());
}

#[cfg(test)]
#[path = "completions_tests.rs"]
mod tests;
