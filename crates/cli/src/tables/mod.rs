// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wu-Manber preprocessing.
//!
//! Builds the three lookup tables from a pattern set:
//! - SHIFT: how far the cursor may skip past a B-byte block
//! - HASH: which patterns can end a `min_len` window at a shift-zero block
//! - PREFIX: which patterns start with a given block, for cheap rejection
//!
//! Only the first `min_len` bytes of each pattern take part in SHIFT and HASH.
//! Tables are a pure function of (pattern set, block width, case mode).

mod block;
mod buckets;
mod shift;

use std::collections::BTreeMap;

use serde::Serialize;

pub use block::{BlockWidth, MAX_BLOCK_WIDTH, TABLE_SIZE, WIDE_BLOCK_THRESHOLD, block_hash};
pub use buckets::{Buckets, HashTable, PrefixTable};
pub use shift::ShiftTable;

use crate::error::{Error, Result};
use crate::fold::CaseMode;
use crate::pattern::{PatternId, PatternSet};

/// Immutable lookup tables for one pattern set and case mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    mode: CaseMode,
    block: usize,
    min_len: usize,
    shift: ShiftTable,
    hash: HashTable,
    prefix: PrefixTable,
    /// Comparison bytes per pattern, folded in insensitive mode.
    needles: Vec<Box<[u8]>>,
}

impl Tables {
    /// Build tables with the automatic block width.
    pub fn build(patterns: &PatternSet, mode: CaseMode) -> Result<Self> {
        Self::build_with_width(patterns, mode, BlockWidth::Auto)
    }

    /// Build tables with an explicit block width request.
    pub fn build_with_width(
        patterns: &PatternSet,
        mode: CaseMode,
        width: BlockWidth,
    ) -> Result<Self> {
        let min_len = patterns.min_len();
        let block = width.resolve(patterns.len(), min_len);
        let fold = mode.table();

        if let Some(short) = patterns.iter().find(|p| p.len() < block) {
            return Err(Error::PatternTooShort {
                id: short.id().index(),
                len: short.len(),
                block,
            });
        }

        let mut shift = ShiftTable::new(min_len - block + 1);
        let mut hash_pairs: Vec<(usize, PatternId)> = Vec::with_capacity(patterns.len());
        let mut prefix_pairs: Vec<(usize, PatternId)> = Vec::with_capacity(patterns.len());
        let mut needles = Vec::with_capacity(patterns.len());

        for pattern in patterns {
            let bytes = pattern.bytes_for(mode);

            for start in 0..=min_len - block {
                let h = block_hash(&bytes[start..start + block], fold);
                shift.lower(h, min_len - block - start);
            }

            let tail = block_hash(&bytes[min_len - block..min_len], fold);
            hash_pairs.push((tail, pattern.id()));
            prefix_pairs.push((block_hash(&bytes[..block], fold), pattern.id()));
            needles.push(bytes.to_vec().into_boxed_slice());
        }

        let tables = Self {
            mode,
            block,
            min_len,
            shift,
            hash: HashTable(Buckets::from_pairs(hash_pairs)),
            prefix: PrefixTable(Buckets::from_pairs(prefix_pairs)),
            needles,
        };

        tracing::debug!(
            patterns = patterns.len(),
            min_len,
            block,
            mode = %mode,
            zero_shift_buckets = tables.hash.buckets().occupied(),
            "built wu-manber tables"
        );

        Ok(tables)
    }

    /// Case mode the tables were built for.
    pub fn mode(&self) -> CaseMode {
        self.mode
    }

    /// Block size B.
    pub fn block(&self) -> usize {
        self.block
    }

    /// Length of the shortest pattern.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn shift(&self) -> &ShiftTable {
        &self.shift
    }

    pub fn hash(&self) -> &HashTable {
        &self.hash
    }

    pub fn prefix(&self) -> &PrefixTable {
        &self.prefix
    }

    /// Number of patterns the tables were built from.
    pub fn pattern_count(&self) -> usize {
        self.needles.len()
    }

    /// Comparison bytes for a pattern.
    #[inline]
    pub fn needle(&self, id: PatternId) -> &[u8] {
        &self.needles[id.index()]
    }

    /// Summary figures for diagnostics.
    pub fn stats(&self) -> TableStats {
        let mut histogram: BTreeMap<usize, usize> = BTreeMap::new();
        for s in self.shift.iter() {
            *histogram.entry(s).or_default() += 1;
        }
        let shift_histogram = histogram
            .into_iter()
            .map(|(shift, slots)| ShiftCount { shift, slots })
            .collect();

        TableStats {
            patterns: self.pattern_count(),
            min_len: self.min_len,
            block: self.block,
            case_mode: self.mode.to_string(),
            default_shift: self.shift.default_shift(),
            shift_histogram,
            zero_shift_buckets: self.hash.buckets().occupied(),
            largest_candidate_bucket: self.hash.buckets().largest(),
            prefix_buckets: self.prefix.buckets().occupied(),
        }
    }
}

/// Number of SHIFT slots holding one shift value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftCount {
    pub shift: usize,
    pub slots: usize,
}

/// Table statistics reported by `kwscan inspect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableStats {
    pub patterns: usize,
    pub min_len: usize,
    pub block: usize,
    pub case_mode: String,
    pub default_shift: usize,
    pub shift_histogram: Vec<ShiftCount>,
    pub zero_shift_buckets: usize,
    pub largest_candidate_bucket: usize,
    pub prefix_buckets: usize,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
