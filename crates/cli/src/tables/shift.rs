// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SHIFT table: how far the cursor may jump past a block.

use super::block::TABLE_SIZE;

/// Skip distance per block hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftTable {
    shifts: Vec<u32>,
    default: u32,
}

impl ShiftTable {
    /// A table where every slot holds `default`.
    pub(crate) fn new(default: usize) -> Self {
        let default = u32::try_from(default).unwrap_or(u32::MAX);
        Self {
            shifts: vec![default; TABLE_SIZE],
            default,
        }
    }

    /// Lower the entry for `hash` to `shift` if that is smaller.
    pub(crate) fn lower(&mut self, hash: usize, shift: usize) {
        let shift = u32::try_from(shift).unwrap_or(u32::MAX);
        let slot = &mut self.shifts[hash];
        if shift < *slot {
            *slot = shift;
        }
    }

    /// Skip distance for a block hash.
    #[inline]
    pub fn get(&self, hash: usize) -> usize {
        self.shifts[hash] as usize
    }

    /// Shift of a block that occurs in no pattern window.
    pub fn default_shift(&self) -> usize {
        self.default as usize
    }

    /// Iterate over every slot's shift.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.shifts.iter().map(|&s| s as usize)
    }
}
