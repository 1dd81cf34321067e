// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kwscan CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use kwscan::cli::{Cli, Command};
use kwscan::completions;
use kwscan::env::names;
use kwscan::error::ExitCode;

mod cmd_inspect;
mod cmd_search;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(names::KWSCAN_LOG).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("kwscan: {}", e);
            match e.downcast_ref::<kwscan::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Search(args)) => cmd_search::run(&cli, args),
        Some(Command::Inspect(args)) => {
            cmd_inspect::run(&cli, args)?;
            Ok(ExitCode::Success)
        }
        Some(Command::Completions(args)) => {
            completions::print_script(args.shell);
            Ok(ExitCode::Success)
        }
    }
}
