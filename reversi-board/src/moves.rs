//! Code for working with [`Move`]s on the Reversi board.

use crate::bitboard::{Bitboard, Squares};
use crate::EDGE_LENGTH;
use itertools::Itertools;
use std::fmt::{self, Display, Formatter};

/// A square on the board, as a zero-indexed (row, col) pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

/// A snapshot of legal moves, iterated in row-major order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MoveList(Bitboard);

impl Move {
    /// Build a move from row and column coordinates.
    /// Returns None if the coordinates are not on the board.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            None
        } else {
            Some(Self { row, col })
        }
    }

    /// Convert from a row-major square index.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / EDGE_LENGTH,
            col: index % EDGE_LENGTH,
        }
    }
}

impl From<Move> for Bitboard {
    fn from(mv: Move) -> Self {
        Bitboard::from_coords(mv.row, mv.col)
    }
}

/// Zero-indexed "(row, col)" notation.
impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl MoveList {
    pub(crate) fn new(mask: Bitboard) -> Self {
        Self(mask)
    }

    /// Returns whether `mv` is in this list.
    pub fn contains(self, mv: Move) -> bool {
        !(self.0 & Bitboard::from(mv)).is_empty()
    }

    /// Returns whether there are no moves in this list.
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// The number of moves in this list.
    pub fn len(self) -> usize {
        self.0.count_occupied() as usize
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveIter;

    fn into_iter(self) -> MoveIter {
        MoveIter(self.0.squares())
    }
}

/// Iterator over a [`MoveList`].
#[derive(Clone, Copy, Debug)]
pub struct MoveIter(Squares);

impl Iterator for MoveIter {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        self.0.next().map(Move::from_index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for MoveIter {}

impl Display for MoveList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.into_iter().join(", "))
    }
}
