//! Static position evaluation.

use crate::board::{BoardState, Color};

/// Score a board for `color` as the number of squares it occupies.
/// Material only: corners, edges and mobility are not weighted.
#[inline]
pub fn evaluate(board: &BoardState, color: Color) -> i32 {
    board.pieces(color).count_occupied() as i32
}
