//! The [`BoardState`] grid and the values stored in it.

use crate::bitboard::{Bitboard, DARK_START, LIGHT_START};
use crate::utils;
use derive_more::Display;
use std::fmt;

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Color {
    Dark,
    Light,
}

impl Default for Color {
    /// Gets the starting color (dark).
    fn default() -> Self {
        Self::Dark
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other color.
    fn not(self) -> Self {
        match self {
            Color::Dark => Color::Light,
            Color::Light => Color::Dark,
        }
    }
}

/// The occupancy of a single square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Dark,
    Light,
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Dark => Cell::Dark,
            Color::Light => Cell::Light,
        }
    }
}

impl Cell {
    /// The color occupying this cell, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Dark => Some(Color::Dark),
            Cell::Light => Some(Color::Light),
        }
    }

    fn to_char(self) -> char {
        match self.color() {
            None => '.',
            Some(Color::Dark) => '●',
            Some(Color::Light) => '◯',
        }
    }
}

/// An 8x8 Reversi board.
///
/// Stored as one [`Bitboard`] per color. The two never overlap, so every
/// square is exactly one of empty, dark or light. Copying is a 16-byte move,
/// which is what lets the search explore hypothetical positions by value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct BoardState {
    dark: Bitboard,
    light: Bitboard,
}

impl Default for BoardState {
    /// Gets the starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// The starting position: Light on (3,3) and (4,4), Dark on (3,4) and (4,3).
    pub const fn new() -> Self {
        Self {
            dark: DARK_START,
            light: LIGHT_START,
        }
    }

    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Self {
            dark: Bitboard::EMPTY,
            light: Bitboard::EMPTY,
        }
    }

    /// Read the cell at (`row`, `col`). Panics if either coordinate is off the board.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if self.dark.contains(row, col) {
            Cell::Dark
        } else if self.light.contains(row, col) {
            Cell::Light
        } else {
            Cell::Empty
        }
    }

    /// Overwrite the cell at (`row`, `col`). Panics if either coordinate is off the board.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let square = Bitboard::from_coords(row, col);
        self.dark &= !square;
        self.light &= !square;

        match cell {
            Cell::Empty => {}
            Cell::Dark => self.dark |= square,
            Cell::Light => self.light |= square,
        }
    }

    /// An independent copy of this board.
    #[inline]
    pub fn copy(&self) -> Self {
        *self
    }

    /// The squares held by `color`.
    #[inline]
    pub fn pieces(&self, color: Color) -> Bitboard {
        match color {
            Color::Dark => self.dark,
            Color::Light => self.light,
        }
    }

    /// The squares with no piece on them.
    #[inline]
    pub fn empty_mask(&self) -> Bitboard {
        !(self.dark | self.light)
    }

    /// Count the squares in state `cell`.
    pub fn count(&self, cell: Cell) -> u8 {
        match cell {
            Cell::Empty => self.empty_mask().count_occupied(),
            Cell::Dark => self.dark.count_occupied(),
            Cell::Light => self.light.count_occupied(),
        }
    }

    /// Move the squares in `flipped` from `color`'s opponent to `color`.
    #[inline]
    pub(crate) fn flip(&mut self, flipped: Bitboard, color: Color) {
        match color {
            Color::Dark => {
                self.light &= !flipped;
                self.dark |= flipped;
            }
            Color::Light => {
                self.dark &= !flipped;
                self.light |= flipped;
            }
        }
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(f, |row, col| self.get(row, col).to_char())
    }
}
