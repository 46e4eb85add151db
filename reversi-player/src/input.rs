//! Human move notation: 1-indexed `row,col`, as in "3,4".

use derive_more::{Display, Error};
use reversi_board::{Move, EDGE_LENGTH};
use std::fmt;

#[derive(Debug, PartialEq, Eq, Display, Error)]
pub enum ParseMoveError {
    #[display(fmt = "expected a row and a column separated by a comma")]
    WrongFieldCount,
    #[display(fmt = "row and column must be numbers")]
    NotANumber,
    #[display(fmt = "row and column must be between 1 and {}", EDGE_LENGTH)]
    OutOfRange,
}

/// Parse a 1-indexed `row,col` pair. Whitespace around either number is ignored.
pub fn parse_move(s: &str) -> Result<Move, ParseMoveError> {
    let mut fields = s.split(',');
    let row = fields.next().ok_or(ParseMoveError::WrongFieldCount)?;
    let col = fields.next().ok_or(ParseMoveError::WrongFieldCount)?;
    if fields.next().is_some() {
        return Err(ParseMoveError::WrongFieldCount);
    }

    let row = parse_coord(row)?;
    let col = parse_coord(col)?;
    Move::from_coords(row, col).ok_or(ParseMoveError::OutOfRange)
}

fn parse_coord(s: &str) -> Result<usize, ParseMoveError> {
    let n: usize = s.trim().parse().or(Err(ParseMoveError::NotANumber))?;
    if n == 0 || n > EDGE_LENGTH {
        return Err(ParseMoveError::OutOfRange);
    }
    Ok(n - 1)
}

/// Displays a [`Move`] in the notation [`parse_move`] accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notation(pub Move);

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0.row + 1, self.0.col + 1)
    }
}
