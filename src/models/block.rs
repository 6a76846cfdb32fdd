//! Family-agnostic `(base, len)` blocks over an explicit bit width.
//!
//! The complement engines work on these so the bisection never needs to know
//! which address family it is running on.

use super::mask::{boundary_bit, cut_addr};

/// A normalized network block: `base` has every bit past `len` cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Block {
    pub base: u128,
    pub len: u8,
}

impl Block {
    pub const fn new(base: u128, len: u8) -> Block {
        Block { base, len }
    }

    /// Split into the lower and upper half at `len + 1`.
    ///
    /// Returns `None` when the block is already a single address.
    pub fn split(self, width: u8) -> Option<(Block, Block)> {
        if self.len >= width {
            return None;
        }
        let new_len = self.len + 1;
        let bit = boundary_bit(new_len, width).ok()?;
        let lower = Block::new(self.base, new_len);
        let upper = Block::new(lower.base ^ bit, new_len);
        Some((lower, upper))
    }

    /// True when `other` lies entirely inside this block.
    pub fn covers(self, other: Block, width: u8) -> bool {
        other.len >= self.len
            && cut_addr(other.base, self.len, width).map_or(false, |base| base == self.base)
    }
}
