// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Effective settings: command-line flags layered over kwscan.toml.

use std::path::Path;

use crate::cli::KeywordArgs;
use crate::config::{self, Config};
use crate::discovery;
use crate::engine::{Engine, EngineConfig};
use crate::error::{Error, Result};
use crate::scanner::ScanOptions;
use crate::source::KeywordSource;
use crate::tables::BlockWidth;

/// Find and load the config file, or fall back to defaults.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    match discovery::resolve_config(explicit, cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load_with_warnings(&path)
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Keyword source and engine settings for one command.
#[derive(Debug, Clone)]
pub struct Settings {
    pub keywords: KeywordSource,
    pub engine: EngineConfig,
}

impl Settings {
    /// Merge keyword flags over the config. Flags win.
    pub fn resolve(args: &KeywordArgs, config: &Config) -> Result<Self> {
        let keywords = args
            .source()
            .or_else(|| config.keywords.source())
            .ok_or_else(|| {
                Error::Argument(
                    "no keywords given: use -k, -e or -f, or set [keywords] in kwscan.toml"
                        .to_string(),
                )
            })?;

        let block_width = match args.block_width {
            Some(width) => BlockWidth::fixed(usize::from(width))?,
            None => config.search.block_width,
        };

        let engine = EngineConfig {
            case_mode: args.case_mode().unwrap_or(config.search.case_mode()),
            block_width,
            scan: ScanOptions {
                short_text: config.search.short_text,
                cancel: None,
            },
        };

        Ok(Self { keywords, engine })
    }

    /// Load the keywords and build the engine.
    pub fn build_engine(&self) -> Result<Engine> {
        let keywords = self.keywords.load()?;
        Engine::new(keywords, self.engine.clone())
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
