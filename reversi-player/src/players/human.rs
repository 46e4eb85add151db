use super::Player;
use crate::input::{parse_move, Notation};
use crate::PlayError;
use reversi_board::{get_valid_moves, BoardState, Color, Move};
use std::io::{BufRead, Write};

/// Reads moves typed as `row,col` (1-indexed), asking again until a legal
/// move is entered.
pub struct HumanPlayer<R, W> {
    color: Color,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(color: Color, input: R, output: W) -> Self {
        Self {
            color,
            input,
            output,
        }
    }

    /// Consume the player, returning its output.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn color(&self) -> Color {
        self.color
    }

    fn next_move(&mut self, board: &BoardState) -> Result<Move, PlayError> {
        let legal = get_valid_moves(board, self.color);

        loop {
            write!(self.output, "{} to move (row,col): ", self.color)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PlayError::EndOfInput);
            }

            let mv = match parse_move(line.trim_end()) {
                Ok(mv) => mv,
                Err(err) => {
                    writeln!(self.output, "Invalid input: {}.", err)?;
                    continue;
                }
            };

            if legal.contains(mv) {
                return Ok(mv);
            }

            let options = legal
                .into_iter()
                .map(|mv| Notation(mv).to_string())
                .collect::<Vec<String>>()
                .join(" ");
            writeln!(
                self.output,
                "{} is not a legal move. Legal moves: {}",
                Notation(mv),
                options
            )?;
        }
    }
}
