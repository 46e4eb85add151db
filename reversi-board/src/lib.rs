//! `reversi-board` holds the rules of Reversi for engines and front ends.
//!
//! This package implements the game at two levels:
//!
//!  - [`bitboard`] contains the raw, unchecked square sets the board is built from.
//!  - [`BoardState`] with the free functions in [`rules`] and [`eval`] implements
//!    the board, move legality, move application and material scoring.
//!
//! Nothing here validates its inputs. Coordinates must be on the board and moves
//! must be checked with [`is_valid_move`] or [`get_valid_moves`] before they are
//! applied.

pub mod bitboard;
pub mod eval;
pub mod rules;
pub mod test_utils;

mod board;
mod moves;
mod utils;

pub use board::*;
pub use eval::evaluate;
pub use moves::*;
pub use rules::{apply_move, get_valid_moves, is_valid_move, play};

/// The number of spaces on one edge of a Reversi board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on a Reversi board.
pub const NUM_SPACES: usize = 64;
