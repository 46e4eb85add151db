//! Low-level bitboard operations.
//!
//! A [`Bitboard`] holds one bit per square. Bit `row * 8 + col` is the square
//! at (`row`, `col`), so the least significant bit is the upper-left corner
//! and iterating set bits from the bottom up visits squares in row-major order.
//!
//! Operations here are unchecked: coordinates outside the board panic.

use crate::{utils, EDGE_LENGTH};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on a Reversi board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting bitboard for Dark: (3,4) and (4,3).
pub const DARK_START: Bitboard = Bitboard((1 << 28) | (1 << 35));

/// Starting bitboard for Light: (3,3) and (4,4).
pub const LIGHT_START: Bitboard = Bitboard((1 << 27) | (1 << 36));

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(f, |row, col| if self.contains(row, col) { '#' } else { '.' })
    }
}

impl Bitboard {
    pub const EMPTY: Self = Self(0);

    /// A bitboard with only the square at (`row`, `col`) set.
    #[inline]
    pub fn from_coords(row: usize, col: usize) -> Self {
        assert!(row < EDGE_LENGTH && col < EDGE_LENGTH);
        Self::from_index(row * EDGE_LENGTH + col)
    }

    /// A bitboard with only the square at row-major `index` set.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self(1 << index)
    }

    /// Whether the square at (`row`, `col`) is set.
    #[inline]
    pub fn contains(self, row: usize, col: usize) -> bool {
        !(self & Self::from_coords(row, col)).is_empty()
    }

    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty spaces in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the row-major indices of the set squares, lowest first.
    pub fn squares(self) -> Squares {
        Squares(self)
    }
}

/// Iterator over the set squares of a [`Bitboard`], yielding row-major indices.
#[derive(Clone, Copy, Debug)]
pub struct Squares(Bitboard);

impl Iterator for Squares {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0.is_empty() {
            return None;
        }

        let index = u64::from(self.0).trailing_zeros() as usize;
        self.0 ^= Bitboard::from_index(index);
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.0.count_occupied() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Squares {}
