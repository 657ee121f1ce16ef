//! Bitboard implementation for line matching
//!
//! Bit `i` corresponds to `Move::from_index(i)` (row-major), so a full
//! 4x4 board fits in a single `u16`.

use super::{Move, TOTAL_CELLS};

/// Occupancy of one player's marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard {
    bits: u16,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Build a bitboard from a raw mask
    pub const fn from_bits(bits: u16) -> Self {
        Self { bits }
    }

    #[inline]
    pub const fn bits(self) -> u16 {
        self.bits
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Move) {
        self.bits |= 1u16 << pos.to_index();
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Move) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Number of set bits inside `mask`
    #[inline]
    pub fn count_in(&self, mask: Bitboard) -> u32 {
        (self.bits & mask.bits).count_ones()
    }

    /// True when every bit of `mask` is set
    #[inline]
    pub fn contains(&self, mask: Bitboard) -> bool {
        self.bits & mask.bits == mask.bits
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over set bit positions, lowest index first
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard::from_bits(self.bits | rhs.bits)
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u16,
}

impl Iterator for BitboardIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }

        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;

        debug_assert!(idx < TOTAL_CELLS);
        Some(Move::from_index(idx))
    }
}
