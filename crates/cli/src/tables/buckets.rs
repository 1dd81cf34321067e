// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HASH and PREFIX tables.
//!
//! Both map a block hash to the pattern ids filed under it. Buckets are stored
//! in one flat id array with a start offset per slot, ids ascending within a
//! bucket.

use super::block::TABLE_SIZE;
use crate::pattern::PatternId;

/// Flat slot -> ids directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets {
    starts: Vec<u32>,
    ids: Vec<PatternId>,
}

impl Buckets {
    /// Build from `(slot, id)` pairs. Pairs must already be in ascending id order.
    pub(crate) fn from_pairs(mut pairs: Vec<(usize, PatternId)>) -> Self {
        // Stable: ids stay ascending inside each slot.
        pairs.sort_by_key(|&(slot, _)| slot);

        let mut starts = vec![0u32; TABLE_SIZE + 1];
        for &(slot, _) in &pairs {
            starts[slot + 1] += 1;
        }
        for i in 0..TABLE_SIZE {
            starts[i + 1] += starts[i];
        }

        Self {
            starts,
            ids: pairs.into_iter().map(|(_, id)| id).collect(),
        }
    }

    /// Ids filed under `slot`.
    #[inline]
    pub fn get(&self, slot: usize) -> &[PatternId] {
        let start = self.starts[slot] as usize;
        let end = self.starts[slot + 1] as usize;
        &self.ids[start..end]
    }

    /// Number of non-empty slots.
    pub fn occupied(&self) -> usize {
        self.starts.windows(2).filter(|w| w[1] > w[0]).count()
    }

    /// Size of the largest bucket.
    pub fn largest(&self) -> usize {
        self.starts
            .windows(2)
            .map(|w| (w[1] - w[0]) as usize)
            .max()
            .unwrap_or(0)
    }
}

/// Candidate patterns per window-end block. Only shift-zero blocks are filed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashTable(pub(crate) Buckets);

impl HashTable {
    /// Patterns whose window ends with the block hashing to `hash`.
    #[inline]
    pub fn candidates(&self, hash: usize) -> &[PatternId] {
        self.0.get(hash)
    }

    pub fn buckets(&self) -> &Buckets {
        &self.0
    }
}

/// Patterns grouped by the hash of their first block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTable(pub(crate) Buckets);

impl PrefixTable {
    /// Patterns whose first block hashes to `hash`.
    pub fn patterns(&self, hash: usize) -> &[PatternId] {
        self.0.get(hash)
    }

    /// Whether pattern `id` starts with a block hashing to `hash`.
    #[inline]
    pub fn accepts(&self, hash: usize, id: PatternId) -> bool {
        self.0.get(hash).binary_search(&id).is_ok()
    }

    pub fn buckets(&self) -> &Buckets {
        &self.0
    }
}
