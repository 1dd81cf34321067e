// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Inspect command implementation.

use std::io::Write;

use kwscan::cli::{Cli, InspectArgs, OutputFormat};
use kwscan::color::resolve_color;
use kwscan::output::FormatOptions;
use kwscan::output::json::JsonFormatter;
use kwscan::output::text::TextFormatter;
use kwscan::settings::{Settings, load_config};

/// Run the inspect command.
pub fn run(cli: &Cli, args: &InspectArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = load_config(cli.config.as_deref(), &cwd)?;
    let settings = Settings::resolve(&args.keywords, &config)?;
    let engine = settings.build_engine()?;
    let stats = engine.tables().stats();

    match args.output.unwrap_or(config.output.format) {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(resolve_color(), FormatOptions::default());
            formatter.write_stats(&stats)?;
        }
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            JsonFormatter::new(&mut lock).write_stats(&stats)?;
            lock.flush()?;
        }
    }
    Ok(())
}
