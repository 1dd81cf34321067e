// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match delivery.
//!
//! The scanner pushes every match into a `MatchSink`. Two modes are provided:
//! - callback: `Callback` forwards each match as it is found
//! - collection: `MatchCollection` groups offsets by pattern
//!
//! `Vec<Match>` also works as a sink and keeps the scan order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::pattern::PatternId;

/// One occurrence of a pattern in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Match {
    /// Byte offset of the first matched byte.
    pub offset: usize,
    /// Pattern that matched.
    pub pattern: PatternId,
}

/// Receiver of match events, called synchronously in scan order.
pub trait MatchSink {
    fn on_match(&mut self, m: Match);
}

impl MatchSink for Vec<Match> {
    fn on_match(&mut self, m: Match) {
        self.push(m);
    }
}

impl<S: MatchSink + ?Sized> MatchSink for &mut S {
    fn on_match(&mut self, m: Match) {
        (**self).on_match(m);
    }
}

/// Streams every match to a closure.
pub struct Callback<F>(pub F);

impl<F: FnMut(Match)> MatchSink for Callback<F> {
    fn on_match(&mut self, m: Match) {
        (self.0)(m);
    }
}

/// Offsets accumulated per pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchCollection {
    by_pattern: BTreeMap<PatternId, Vec<usize>>,
    total: usize,
}

impl MatchCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offsets for one pattern, ascending. Empty when it never matched.
    pub fn offsets(&self, pattern: PatternId) -> &[usize] {
        self.by_pattern
            .get(&pattern)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of matches.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of patterns that matched at least once.
    pub fn distinct(&self) -> usize {
        self.by_pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Patterns in id order with their offsets.
    pub fn iter(&self) -> impl Iterator<Item = (PatternId, &[usize])> {
        self.by_pattern.iter().map(|(&id, offsets)| (id, offsets.as_slice()))
    }

    pub fn into_map(self) -> BTreeMap<PatternId, Vec<usize>> {
        self.by_pattern
    }
}

impl MatchSink for MatchCollection {
    fn on_match(&mut self, m: Match) {
        self.by_pattern.entry(m.pattern).or_default().push(m.offset);
        self.total += 1;
    }
}

/// Counts matches without storing them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter(pub usize);

impl MatchSink for Counter {
    fn on_match(&mut self, _m: Match) {
        self.0 += 1;
    }
}
