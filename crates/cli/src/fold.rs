// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Case folding for keyword and text bytes.
//!
//! Folding is ASCII only: `A-Z` map to `a-z`, every other byte maps to itself.
//! Multi-byte UTF-8 sequences are compared byte for byte.

use std::fmt;

/// Whether letter case takes part in a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseMode {
    /// Bytes must match exactly.
    Sensitive,
    /// ASCII letters match regardless of case.
    #[default]
    Insensitive,
}

impl CaseMode {
    /// Map a `case_insensitive` flag to a mode.
    pub fn from_insensitive(case_insensitive: bool) -> Self {
        if case_insensitive {
            CaseMode::Insensitive
        } else {
            CaseMode::Sensitive
        }
    }

    pub fn is_insensitive(self) -> bool {
        self == CaseMode::Insensitive
    }

    /// The byte translation table for this mode.
    pub fn table(self) -> &'static FoldTable {
        match self {
            CaseMode::Sensitive => &IDENTITY,
            CaseMode::Insensitive => &ASCII_LOWER,
        }
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseMode::Sensitive => write!(f, "case-sensitive"),
            CaseMode::Insensitive => write!(f, "case-insensitive"),
        }
    }
}

/// A 256-entry byte translation table.
pub struct FoldTable([u8; 256]);

impl FoldTable {
    #[inline]
    pub fn fold(&self, byte: u8) -> u8 {
        self.0[byte as usize]
    }

    /// Fold a whole byte string.
    pub fn fold_all(&self, bytes: &[u8]) -> Vec<u8> {
        bytes.iter().map(|&b| self.fold(b)).collect()
    }

    /// Compare `pattern` (already folded) against `text` folded on the fly.
    #[inline]
    pub fn eq_folded(&self, pattern: &[u8], text: &[u8]) -> bool {
        pattern.len() == text.len()
            && pattern
                .iter()
                .zip(text)
                .all(|(&p, &t)| p == self.fold(t))
    }
}

const fn build_table(lower: bool) -> FoldTable {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let b = i as u8;
        table[i] = if lower && b.is_ascii_uppercase() {
            b + (b'a' - b'A')
        } else {
            b
        };
        i += 1;
    }
    FoldTable(table)
}

static IDENTITY: FoldTable = build_table(false);
static ASCII_LOWER: FoldTable = build_table(true);

#[cfg(test)]
#[path = "fold_tests.rs"]
mod tests;
