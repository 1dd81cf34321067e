// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Keyword patterns and the ordered set the tables are built from.
//!
//! Ids are 0-based and follow input order. Duplicate keywords are kept: each
//! copy gets its own id and reports its own matches.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::fold::CaseMode;

/// Stable ordinal of a pattern within its set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PatternId(u32);

impl PatternId {
    pub(crate) fn from_index(index: usize) -> Result<Self> {
        u32::try_from(index)
            .map(PatternId)
            .map_err(|_| Error::Internal(format!("pattern index {} exceeds u32", index)))
    }

    /// Position of the pattern in its set.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single literal keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    id: PatternId,
    raw: Vec<u8>,
    folded: Vec<u8>,
}

impl Pattern {
    pub fn id(&self) -> PatternId {
        self.id
    }

    /// The keyword bytes as supplied.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// The ASCII-lowercased keyword bytes.
    pub fn folded(&self) -> &[u8] {
        &self.folded
    }

    /// Bytes compared against text under `mode`.
    pub fn bytes_for(&self, mode: CaseMode) -> &[u8] {
        match mode {
            CaseMode::Sensitive => &self.raw,
            CaseMode::Insensitive => &self.folded,
        }
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Lossy UTF-8 rendering for reports.
    pub fn display(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.raw)
    }
}

/// Ordered, immutable collection of patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
    min_len: usize,
    max_len: usize,
}

impl PatternSet {
    /// Build a set from keywords, assigning ids in input order.
    ///
    /// Fails with `EmptyPatternSet` when no keywords are given and with
    /// `PatternTooShort` for an empty keyword.
    pub fn build<I, K>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        let fold = CaseMode::Insensitive.table();
        let mut patterns = Vec::new();

        for (index, keyword) in keywords.into_iter().enumerate() {
            let raw = keyword.as_ref();
            if raw.is_empty() {
                return Err(Error::PatternTooShort {
                    id: index,
                    len: 0,
                    block: 1,
                });
            }
            patterns.push(Pattern {
                id: PatternId::from_index(index)?,
                raw: raw.to_vec(),
                folded: fold.fold_all(raw),
            });
        }

        let min_len = patterns.iter().map(Pattern::len).min();
        let max_len = patterns.iter().map(Pattern::len).max();
        let (Some(min_len), Some(max_len)) = (min_len, max_len) else {
            return Err(Error::EmptyPatternSet);
        };

        tracing::trace!(count = patterns.len(), min_len, max_len, "pattern set built");

        Ok(Self {
            patterns,
            min_len,
            max_len,
        })
    }

    /// Number of patterns, duplicates included.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Length of the shortest pattern.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Length of the longest pattern.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn get(&self, id: PatternId) -> Option<&Pattern> {
        self.patterns.get(id.index())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
