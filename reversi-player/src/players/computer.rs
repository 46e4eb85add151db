use super::Player;
use crate::PlayError;
use reversi_board::{BoardState, Color, Move};
use reversi_search::choose_move;

/// Plays the move chosen by [`choose_move`].
#[derive(Clone, Copy, Debug)]
pub struct ComputerPlayer {
    color: Color,
}

impl ComputerPlayer {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Player for ComputerPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn next_move(&mut self, board: &BoardState) -> Result<Move, PlayError> {
        choose_move(board, self.color).ok_or(PlayError::NoMove(self.color))
    }
}
