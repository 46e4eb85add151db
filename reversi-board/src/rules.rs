//! Move legality and move application.
//!
//! All three rule operations (the validity predicate, enumeration and
//! application) are built on [`scan_ray`], which walks one direction from a
//! square and reports the run of opposing pieces and how the walk ended.
//!
//! None of these functions validate their inputs: coordinates must be on the
//! board, and [`apply_move`] must only be called with a legal move.

use crate::bitboard::Bitboard;
use crate::board::{BoardState, Color};
use crate::moves::{Move, MoveList};
use crate::EDGE_LENGTH;
use itertools::iproduct;

/// One of the eight compass directions, as a (row, col) step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Direction {
    pub d_row: isize,
    pub d_col: isize,
}

/// All eight directions: N, S, W, E, NW, NE, SW, SE.
pub const DIRECTIONS: [Direction; 8] = [
    Direction { d_row: -1, d_col: 0 },
    Direction { d_row: 1, d_col: 0 },
    Direction { d_row: 0, d_col: -1 },
    Direction { d_row: 0, d_col: 1 },
    Direction { d_row: -1, d_col: -1 },
    Direction { d_row: -1, d_col: 1 },
    Direction { d_row: 1, d_col: -1 },
    Direction { d_row: 1, d_col: 1 },
];

/// What stopped a ray scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RayEnd {
    /// A piece of the moving color.
    Own,
    /// An empty square.
    Empty,
    /// The edge of the board.
    Edge,
}

/// The result of walking one direction from a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ray {
    /// The contiguous opposing pieces passed over, starting next to the origin.
    pub run: Bitboard,
    pub end: RayEnd,
}

impl Ray {
    /// Whether this ray sandwiches at least one opposing piece.
    #[inline]
    pub fn captures(self) -> bool {
        self.end == RayEnd::Own && !self.run.is_empty()
    }
}

/// Step one square from (`row`, `col`) in `direction`, or None off the board.
#[inline]
fn step(row: usize, col: usize, direction: Direction) -> Option<(usize, usize)> {
    let row = row as isize + direction.d_row;
    let col = col as isize + direction.d_col;
    let edge = EDGE_LENGTH as isize;

    if row < 0 || row >= edge || col < 0 || col >= edge {
        None
    } else {
        Some((row as usize, col as usize))
    }
}

/// Walk from (`row`, `col`) in `direction`, collecting opposing pieces until
/// something other than an opposing piece is reached. The origin itself is
/// not inspected.
pub fn scan_ray(
    board: &BoardState,
    row: usize,
    col: usize,
    color: Color,
    direction: Direction,
) -> Ray {
    let own = board.pieces(color);
    let opponent = board.pieces(!color);

    let mut run = Bitboard::EMPTY;
    let mut pos = step(row, col, direction);

    while let Some((r, c)) = pos {
        if opponent.contains(r, c) {
            run |= Bitboard::from_coords(r, c);
            pos = step(r, c, direction);
        } else if own.contains(r, c) {
            return Ray { run, end: RayEnd::Own };
        } else {
            return Ray { run, end: RayEnd::Empty };
        }
    }

    Ray { run, end: RayEnd::Edge }
}

/// Returns whether `color` may play at (`row`, `col`): the square is empty and
/// at least one direction sandwiches opposing pieces.
pub fn is_valid_move(board: &BoardState, row: usize, col: usize, color: Color) -> bool {
    if !board.empty_mask().contains(row, col) {
        return false;
    }

    DIRECTIONS
        .iter()
        .any(|&direction| scan_ray(board, row, col, color, direction).captures())
}

/// Get every legal move for `color`, in row-major order.
pub fn get_valid_moves(board: &BoardState, color: Color) -> MoveList {
    let mask = iproduct!(0..EDGE_LENGTH, 0..EDGE_LENGTH)
        .filter(|&(row, col)| is_valid_move(board, row, col, color))
        .fold(Bitboard::EMPTY, |mask, (row, col)| {
            mask | Bitboard::from_coords(row, col)
        });

    MoveList::new(mask)
}

/// Compute the pieces `color` would flip by playing at (`row`, `col`).
/// Every direction is scanned against the unchanged board.
pub fn flips(board: &BoardState, row: usize, col: usize, color: Color) -> Bitboard {
    DIRECTIONS
        .iter()
        .map(|&direction| scan_ray(board, row, col, color, direction))
        .filter(|ray| ray.captures())
        .fold(Bitboard::EMPTY, |flipped, ray| flipped | ray.run)
}

/// Place a `color` piece at (`row`, `col`) and flip every sandwiched run.
/// Returns the flipped squares. Undefined results if the move is not legal.
pub fn apply_move(board: &mut BoardState, row: usize, col: usize, color: Color) -> Bitboard {
    let flipped = flips(board, row, col, color);
    board.set(row, col, color.into());
    board.flip(flipped, color);
    flipped
}

/// [`apply_move`] for a [`Move`].
#[inline]
pub fn play(board: &mut BoardState, mv: Move, color: Color) -> Bitboard {
    apply_move(board, mv.row, mv.col, color)
}
