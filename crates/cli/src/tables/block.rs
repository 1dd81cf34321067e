// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Block width selection and block hashing.

use crate::error::{Error, Result};
use crate::fold::FoldTable;

/// Number of hash bits addressed by every table.
pub const TABLE_BITS: u32 = 16;

/// Slots in the SHIFT table and bucket directories.
pub const TABLE_SIZE: usize = 1 << TABLE_BITS;

const TABLE_MASK: u32 = (1 << TABLE_BITS) - 1;

/// Pattern count above which three-byte blocks are used.
pub const WIDE_BLOCK_THRESHOLD: usize = 100;

/// Largest supported block width.
pub const MAX_BLOCK_WIDTH: usize = 3;

/// Requested block width before clamping to the shortest pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockWidth {
    /// 2 bytes, or 3 bytes for sets larger than `WIDE_BLOCK_THRESHOLD`.
    #[default]
    Auto,
    /// Fixed width between 1 and `MAX_BLOCK_WIDTH`.
    Fixed(usize),
}

impl BlockWidth {
    /// Validate an explicit width.
    pub fn fixed(width: usize) -> Result<Self> {
        if (1..=MAX_BLOCK_WIDTH).contains(&width) {
            Ok(BlockWidth::Fixed(width))
        } else {
            Err(Error::Argument(format!(
                "block width must be between 1 and {}, got {}",
                MAX_BLOCK_WIDTH, width
            )))
        }
    }

    /// Block size B for a set of `count` patterns whose shortest is `min_len`.
    pub fn resolve(self, count: usize, min_len: usize) -> usize {
        let width = match self {
            BlockWidth::Auto if count > WIDE_BLOCK_THRESHOLD => 3,
            BlockWidth::Auto => 2,
            BlockWidth::Fixed(width) => width,
        };
        width.clamp(1, MAX_BLOCK_WIDTH).min(min_len).max(1)
    }
}

/// Hash a block of at most `MAX_BLOCK_WIDTH` bytes into a table slot.
///
/// Bytes pass through `fold` first. Blocks of one or two bytes map to distinct
/// slots; three-byte blocks may collide.
#[inline]
pub fn block_hash(block: &[u8], fold: &FoldTable) -> usize {
    let mut h: u32 = 0;
    for &b in block {
        h = (h << 8) | fold.fold(b) as u32;
    }
    ((h ^ (h >> 11)) & TABLE_MASK) as usize
}

#[cfg(test)]
#[path = "block_tests.rs"]
mod tests;
