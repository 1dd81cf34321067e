// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search engine: a pattern set plus the tables built from it.
//!
//! Tables are built once at construction and never change. Switching case
//! mode produces a new engine.

use rayon::prelude::*;

use crate::error::Result;
use crate::fold::CaseMode;
use crate::pattern::PatternSet;
use crate::scanner::{Counter, Match, MatchCollection, MatchSink, ScanOptions, Scanner};
use crate::tables::{BlockWidth, Tables};

/// Settings fixed at engine construction.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub case_mode: CaseMode,
    pub block_width: BlockWidth,
    pub scan: ScanOptions,
}

/// A ready-to-search keyword set.
#[derive(Debug, Clone)]
pub struct Engine {
    patterns: PatternSet,
    tables: Tables,
    config: EngineConfig,
}

impl Engine {
    /// Build an engine from raw keywords.
    pub fn new<I, K>(keywords: I, config: EngineConfig) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        Self::from_pattern_set(PatternSet::build(keywords)?, config)
    }

    /// Build an engine from an existing pattern set.
    pub fn from_pattern_set(patterns: PatternSet, config: EngineConfig) -> Result<Self> {
        let tables = Tables::build_with_width(&patterns, config.case_mode, config.block_width)?;
        Ok(Self {
            patterns,
            tables,
            config,
        })
    }

    /// Rebuild the tables for another case mode.
    pub fn with_case_mode(self, case_mode: CaseMode) -> Result<Self> {
        if case_mode == self.config.case_mode {
            return Ok(self);
        }
        let config = EngineConfig {
            case_mode,
            ..self.config
        };
        Self::from_pattern_set(self.patterns, config)
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn case_mode(&self) -> CaseMode {
        self.config.case_mode
    }

    fn scanner(&self) -> Scanner<'_> {
        Scanner::new(&self.tables).with_options(self.config.scan.clone())
    }

    /// Scan `text`, delivering matches to `sink`. Returns the match count.
    pub fn search<S>(&self, text: &[u8], sink: &mut S) -> Result<usize>
    where
        S: MatchSink + ?Sized,
    {
        self.scanner().scan(text, sink)
    }

    /// Scan with per-call options (cancel token, short-text policy).
    pub fn search_with<S>(&self, text: &[u8], options: ScanOptions, sink: &mut S) -> Result<usize>
    where
        S: MatchSink + ?Sized,
    {
        Scanner::new(&self.tables).with_options(options).scan(text, sink)
    }

    /// Scan and collect offsets per pattern.
    pub fn collect(&self, text: &[u8]) -> Result<MatchCollection> {
        let mut collection = MatchCollection::new();
        self.search(text, &mut collection)?;
        Ok(collection)
    }

    /// Scan and return matches in scan order.
    pub fn find_all(&self, text: &[u8]) -> Result<Vec<Match>> {
        let mut matches = Vec::new();
        self.search(text, &mut matches)?;
        Ok(matches)
    }

    /// Count matches without storing them.
    pub fn count(&self, text: &[u8]) -> Result<usize> {
        self.search(text, &mut Counter::default())
    }

    /// Scan several texts in parallel, sharing the tables.
    ///
    /// Results are returned in input order. Runs on the current rayon pool.
    pub fn search_many<T>(&self, texts: &[T]) -> Vec<Result<MatchCollection>>
    where
        T: AsRef<[u8]> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.collect(text.as_ref()))
            .collect()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
