use crate::PlayError;
use reversi_board::{BoardState, Color, Move};

/// Somewhere the next move for one color comes from.
pub trait Player {
    /// The color this player moves for.
    fn color(&self) -> Color;

    /// Pick a move on `board`. Only called when this player has a legal move,
    /// and the returned move must be legal.
    fn next_move(&mut self, board: &BoardState) -> Result<Move, PlayError>;
}
