// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

use crate::fold::CaseMode;
use crate::source::KeywordSource;

const SEARCH_EXAMPLES: &str = "\
Examples:
  kwscan search -k cat,dog notes.txt          Keywords from a comma list
  kwscan search -f words.txt https://host/x   Keywords from a file, text from a URL
  kwscan search -e needle -e pin \"literal text\"
  kwscan search -v -o json -k error logs/app.log";

/// Scan texts for many keywords at once
#[derive(Parser)]
#[command(name = "kwscan")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "KWSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report every keyword occurrence in one or more texts
    Search(SearchArgs),
    /// Build the lookup tables for a keyword set and print statistics
    Inspect(InspectArgs),
    /// Print a shell completion script
    Completions(CompletionsArgs),
}

/// Where keywords come from and how they are matched.
#[derive(clap::Args, Debug, Default)]
#[command(group(
    ArgGroup::new("keyword_source")
        .args(["keywords", "keyword", "keywords_file"])
        .multiple(false)
))]
pub struct KeywordArgs {
    /// Keyword file, or comma-separated keywords
    #[arg(short = 'k', long = "keywords", value_name = "FILE|LIST")]
    pub keywords: Option<String>,

    /// A keyword (repeatable)
    #[arg(short = 'e', long = "keyword", value_name = "KEYWORD")]
    pub keyword: Vec<String>,

    /// File with one keyword per line
    #[arg(short = 'f', long = "keywords-file", value_name = "PATH")]
    pub keywords_file: Option<PathBuf>,

    /// Match regardless of ASCII letter case (default)
    #[arg(short = 'i', long = "ignore-case", conflicts_with = "case_sensitive")]
    pub ignore_case: bool,

    /// Match letter case exactly
    #[arg(short = 's', long = "case-sensitive")]
    pub case_sensitive: bool,

    /// Bytes hashed per table block (1-3, default: auto)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=3))]
    pub block_width: Option<u8>,
}

impl KeywordArgs {
    /// Keyword source named on the command line, if any.
    pub fn source(&self) -> Option<KeywordSource> {
        if let Some(arg) = &self.keywords {
            return Some(KeywordSource::detect(arg));
        }
        if !self.keyword.is_empty() {
            return Some(KeywordSource::List(self.keyword.clone()));
        }
        self.keywords_file.clone().map(KeywordSource::File)
    }

    /// Case mode forced by `-i`/`-s`, if any.
    pub fn case_mode(&self) -> Option<CaseMode> {
        if self.case_sensitive {
            Some(CaseMode::Sensitive)
        } else if self.ignore_case {
            Some(CaseMode::Insensitive)
        } else {
            None
        }
    }
}

#[derive(clap::Args)]
#[command(after_help = SEARCH_EXAMPLES)]
pub struct SearchArgs {
    #[command(flatten)]
    pub keywords: KeywordArgs,

    /// Texts to scan: file paths, http(s) URLs, or literal text
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,

    /// Print each match as it is found
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print only match counts
    #[arg(short = 'c', long, conflicts_with = "verbose")]
    pub count: bool,

    /// Output format
    #[arg(short, long)]
    pub output: Option<OutputFormat>,

    /// Maximum offsets to print per keyword (0: no limit)
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Print build and scan timings to stderr
    #[arg(long)]
    pub timing: bool,

    /// Worker threads for scanning several texts (0: one per core)
    #[arg(short = 'j', long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Fail when a text is shorter than the shortest keyword
    #[arg(long)]
    pub strict: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub keywords: KeywordArgs,

    /// Output format
    #[arg(short, long)]
    pub output: Option<OutputFormat>,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
