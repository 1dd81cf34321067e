// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Wu-Manber scan loop.
//!
//! A cursor walks the text on the last byte of a `min_len` window. The SHIFT
//! table decides how far it may jump; at shift-zero blocks the HASH table
//! yields candidates, the PREFIX table rejects most of them, and survivors are
//! compared in full. After a verification step the cursor advances by one so
//! overlapping occurrences are all reported.

mod cancel;
mod sink;

pub use cancel::CancelToken;
pub use sink::{Callback, Counter, Match, MatchCollection, MatchSink};

use crate::error::{Error, Result};
use crate::fold::CaseMode;
use crate::tables::{Tables, block_hash};

/// What to do with a text shorter than the shortest pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortTextPolicy {
    /// Report zero matches.
    #[default]
    Empty,
    /// Fail with `TextShorterThanPattern`.
    Error,
}

/// Per-scan options.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub short_text: ShortTextPolicy,
    pub cancel: Option<CancelToken>,
}

/// Scan `text` with `tables` in `mode`, returning the number of matches.
///
/// `mode` must be the mode the tables were built for.
pub fn search<S>(tables: &Tables, text: &[u8], mode: CaseMode, sink: &mut S) -> Result<usize>
where
    S: MatchSink + ?Sized,
{
    Scanner::new(tables).scan_in_mode(text, mode, sink)
}

/// A scanner bound to one table set.
///
/// Holds no per-text state, so one scanner can be shared across threads.
#[derive(Debug, Clone)]
pub struct Scanner<'t> {
    tables: &'t Tables,
    options: ScanOptions,
}

impl<'t> Scanner<'t> {
    pub fn new(tables: &'t Tables) -> Self {
        Self {
            tables,
            options: ScanOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// Scan in the mode the tables were built for.
    pub fn scan<S>(&self, text: &[u8], sink: &mut S) -> Result<usize>
    where
        S: MatchSink + ?Sized,
    {
        self.scan_in_mode(text, self.tables.mode(), sink)
    }

    /// Scan, rejecting a mode that differs from the tables'.
    pub fn scan_in_mode<S>(&self, text: &[u8], mode: CaseMode, sink: &mut S) -> Result<usize>
    where
        S: MatchSink + ?Sized,
    {
        if mode != self.tables.mode() {
            return Err(Error::CaseModeMismatch {
                built: self.tables.mode(),
                requested: mode,
            });
        }
        if text.is_empty() {
            return Err(Error::EmptyText);
        }

        let min_len = self.tables.min_len();
        if text.len() < min_len {
            return match self.options.short_text {
                ShortTextPolicy::Empty => Ok(0),
                ShortTextPolicy::Error => Err(Error::TextShorterThanPattern {
                    text_len: text.len(),
                    min_len,
                }),
            };
        }

        let count = match mode {
            CaseMode::Sensitive => self.run(text, sink, |needle, window| needle == window),
            CaseMode::Insensitive => {
                let fold = mode.table();
                self.run(text, sink, |needle, window| fold.eq_folded(needle, window))
            }
        }?;

        tracing::debug!(text_len = text.len(), matches = count, "scan complete");
        Ok(count)
    }

    fn run<S, V>(&self, text: &[u8], sink: &mut S, verify: V) -> Result<usize>
    where
        S: MatchSink + ?Sized,
        V: Fn(&[u8], &[u8]) -> bool,
    {
        let tables = self.tables;
        let fold = tables.mode().table();
        let block = tables.block();
        let min_len = tables.min_len();
        let cancel = self.options.cancel.as_ref();
        let len = text.len();

        let mut count = 0;
        let mut pos = min_len - 1;

        while pos < len {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                return Err(Error::Cancelled { matches: count });
            }

            let hash = block_hash(&text[pos + 1 - block..=pos], fold);
            let shift = tables.shift().get(hash);
            if shift > 0 {
                pos += shift;
                continue;
            }

            let start = pos + 1 - min_len;
            let prefix = block_hash(&text[start..start + block], fold);

            for &id in tables.hash().candidates(hash) {
                if !tables.prefix().accepts(prefix, id) {
                    continue;
                }
                let needle = tables.needle(id);
                let end = start + needle.len();
                if end > len || !verify(needle, &text[start..end]) {
                    continue;
                }
                sink.on_match(Match {
                    offset: start,
                    pattern: id,
                });
                count += 1;
            }

            pos += 1;
        }

        Ok(count)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
