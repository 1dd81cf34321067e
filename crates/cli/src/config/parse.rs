// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for configuration.
//!
//! Section parsers return a plain message on invalid values; the caller
//! attaches the config path.

use std::path::Path;

use super::{KeywordsConfig, OutputConfig, SearchConfig};
use crate::cli::OutputFormat;
use crate::scanner::ShortTextPolicy;
use crate::tables::{BlockWidth, MAX_BLOCK_WIDTH};

pub(super) const SEARCH_KEYS: &[&str] = &["case_insensitive", "block_width", "short_text", "jobs"];
pub(super) const KEYWORDS_KEYS: &[&str] = &["list", "file"];
pub(super) const OUTPUT_KEYS: &[&str] = &["format", "limit"];

type ParseResult<T> = std::result::Result<T, String>;

/// Dotted names of keys in `value` that are not in `known`.
pub(super) fn unknown_keys(value: Option<&toml::Value>, section: &str, known: &[&str]) -> Vec<String> {
    let Some(table) = value.and_then(|v| v.as_table()) else {
        return Vec::new();
    };
    table
        .keys()
        .filter(|key| !known.contains(&key.as_str()))
        .map(|key| format!("{}.{}", section, key))
        .collect()
}

/// Parse a TOML array of strings into a Vec<String>.
fn parse_string_array(value: Option<&toml::Value>, key: &str) -> ParseResult<Vec<String>> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let array = value
        .as_array()
        .ok_or_else(|| format!("{}: expected an array of strings", key))?;
    array
        .iter()
        .map(|v| {
            v.as_str()
                .map(String::from)
                .ok_or_else(|| format!("{}: expected an array of strings", key))
        })
        .collect()
}

/// Parse a TOML boolean value with a default.
fn parse_bool_or(value: Option<&toml::Value>, key: &str, default: bool) -> ParseResult<bool> {
    match value {
        None => Ok(default),
        Some(v) => v
            .as_bool()
            .ok_or_else(|| format!("{}: expected true or false", key)),
    }
}

/// Parse a non-negative TOML integer value as usize with a default.
fn parse_usize_or(value: Option<&toml::Value>, key: &str, default: usize) -> ParseResult<usize> {
    match value {
        None => Ok(default),
        Some(v) => v
            .as_integer()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| format!("{}: expected a non-negative integer", key)),
    }
}

fn parse_block_width(value: Option<&toml::Value>) -> ParseResult<BlockWidth> {
    let invalid = || {
        format!(
            "search.block_width: expected \"auto\" or an integer from 1 to {}",
            MAX_BLOCK_WIDTH
        )
    };
    match value {
        None => Ok(BlockWidth::Auto),
        Some(toml::Value::String(s)) if s == "auto" => Ok(BlockWidth::Auto),
        Some(toml::Value::Integer(n)) => usize::try_from(*n)
            .ok()
            .and_then(|w| BlockWidth::fixed(w).ok())
            .ok_or_else(invalid),
        Some(_) => Err(invalid()),
    }
}

fn parse_short_text(value: Option<&toml::Value>) -> ParseResult<ShortTextPolicy> {
    match value.map(|v| v.as_str()) {
        None => Ok(ShortTextPolicy::default()),
        Some(Some("empty")) => Ok(ShortTextPolicy::Empty),
        Some(Some("error")) => Ok(ShortTextPolicy::Error),
        Some(_) => Err("search.short_text: expected \"empty\" or \"error\"".to_string()),
    }
}

fn parse_format(value: Option<&toml::Value>) -> ParseResult<OutputFormat> {
    match value.map(|v| v.as_str()) {
        None => Ok(OutputFormat::default()),
        Some(Some("text")) => Ok(OutputFormat::Text),
        Some(Some("json")) => Ok(OutputFormat::Json),
        Some(_) => Err("output.format: expected \"text\" or \"json\"".to_string()),
    }
}

/// Parse `[search]`.
pub(super) fn parse_search_config(value: Option<&toml::Value>) -> ParseResult<SearchConfig> {
    let Some(t) = value.and_then(|v| v.as_table()) else {
        return Ok(SearchConfig::default());
    };
    let defaults = SearchConfig::default();

    Ok(SearchConfig {
        case_insensitive: parse_bool_or(
            t.get("case_insensitive"),
            "search.case_insensitive",
            defaults.case_insensitive,
        )?,
        block_width: parse_block_width(t.get("block_width"))?,
        short_text: parse_short_text(t.get("short_text"))?,
        jobs: parse_usize_or(t.get("jobs"), "search.jobs", defaults.jobs)?,
    })
}

/// Parse `[keywords]`, resolving `file` against `base_dir`.
pub(super) fn parse_keywords_config(
    value: Option<&toml::Value>,
    base_dir: &Path,
) -> ParseResult<KeywordsConfig> {
    let Some(t) = value.and_then(|v| v.as_table()) else {
        return Ok(KeywordsConfig::default());
    };

    let list = parse_string_array(t.get("list"), "keywords.list")?;
    let file = match t.get("file") {
        None => None,
        Some(v) => {
            let file = v
                .as_str()
                .ok_or_else(|| "keywords.file: expected a path string".to_string())?;
            Some(base_dir.join(file))
        }
    };

    if file.is_some() && !list.is_empty() {
        return Err("keywords: set either `list` or `file`, not both".to_string());
    }

    Ok(KeywordsConfig { list, file })
}

/// Parse `[output]`.
pub(super) fn parse_output_config(value: Option<&toml::Value>) -> ParseResult<OutputConfig> {
    let Some(t) = value.and_then(|v| v.as_table()) else {
        return Ok(OutputConfig::default());
    };

    Ok(OutputConfig {
        format: parse_format(t.get("format"))?,
        limit: parse_usize_or(t.get("limit"), "output.limit", 0)?,
    })
}

/// Warn about unknown configuration key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "kwscan: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}
