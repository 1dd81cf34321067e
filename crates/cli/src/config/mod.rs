// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles kwscan.toml parsing with version validation and unknown key warnings.

mod parse;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use crate::fold::CaseMode;
use crate::scanner::ShortTextPolicy;
use crate::source::KeywordSource;
use crate::tables::BlockWidth;
use parse::{
    parse_keywords_config, parse_output_config, parse_search_config, unknown_keys,
    warn_unknown_key,
};

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    search: Option<toml::Value>,

    #[serde(default)]
    keywords: Option<toml::Value>,

    #[serde(default)]
    output: Option<toml::Value>,

    #[serde(flatten)]
    unknown: std::collections::BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Matching settings.
    pub search: SearchConfig,

    /// Default keywords.
    pub keywords: KeywordsConfig,

    /// Report settings.
    pub output: OutputConfig,
}

/// `[search]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Fold ASCII case when matching (default: true).
    pub case_insensitive: bool,

    /// Bytes per table block.
    pub block_width: BlockWidth,

    /// Handling of texts shorter than every keyword.
    pub short_text: ShortTextPolicy,

    /// Worker threads for multi-text scans (0: rayon default).
    pub jobs: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            block_width: BlockWidth::Auto,
            short_text: ShortTextPolicy::Empty,
            jobs: 0,
        }
    }
}

impl SearchConfig {
    pub fn case_mode(&self) -> CaseMode {
        CaseMode::from_insensitive(self.case_insensitive)
    }
}

/// `[keywords]` section.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct KeywordsConfig {
    /// Keywords listed inline.
    pub list: Vec<String>,

    /// Keyword file, resolved against the config file's directory.
    pub file: Option<PathBuf>,
}

impl KeywordsConfig {
    /// Keyword source configured, if any.
    pub fn source(&self) -> Option<KeywordSource> {
        if let Some(file) = &self.file {
            Some(KeywordSource::File(file.clone()))
        } else if !self.list.is_empty() {
            Some(KeywordSource::List(self.list.clone()))
        } else {
            None
        }
    }
}

/// `[output]` section.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Maximum offsets printed per keyword (0: no limit).
    pub limit: usize,
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "search", "keywords", "output"];

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    parse(&read(path)?, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    parse_with_warnings(&read(path)?, path)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse config from string content (strict mode: unknown keys are errors).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let (config, unknown) = parse_flexible(content, path)?;
    match unknown.first() {
        Some(key) => Err(config_error(path, format!("unknown field `{}`", key))),
        None => Ok(config),
    }
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let (config, unknown) = parse_flexible(content, path)?;
    for key in &unknown {
        warn_unknown_key(path, key);
    }
    Ok(config)
}

/// Parse known sections and collect the dotted names of unknown keys.
fn parse_flexible(content: &str, path: &Path) -> Result<(Config, Vec<String>)> {
    // First check version
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error(path, "missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(
            path,
            format!(
                "unsupported config version {} (supported: {})\n  Upgrade kwscan to use this config.",
                version, SUPPORTED_VERSION
            ),
        ));
    }

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;

    let mut unknown: Vec<String> = flexible
        .unknown
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();

    let search = flexible.search.as_ref();
    let keywords = flexible.keywords.as_ref();
    let output = flexible.output.as_ref();
    unknown.extend(unknown_keys(search, "search", parse::SEARCH_KEYS));
    unknown.extend(unknown_keys(keywords, "keywords", parse::KEYWORDS_KEYS));
    unknown.extend(unknown_keys(output, "output", parse::OUTPUT_KEYS));

    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let config = Config {
        version,
        search: parse_search_config(search).map_err(|m| config_error(path, m))?,
        keywords: parse_keywords_config(keywords, base_dir).map_err(|m| config_error(path, m))?,
        output: parse_output_config(output).map_err(|m| config_error(path, m))?,
    };

    Ok((config, unknown))
}

fn config_error(path: &Path, message: String) -> Error {
    Error::Config {
        message,
        path: Some(path.to_path_buf()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
