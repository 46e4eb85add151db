use derive_more::{Display, Error};
use reversi_board::{Color, Move};
use std::io;

/// Failures that stop a game in progress.
#[derive(Debug, Display, Error)]
pub enum PlayError {
    #[display(fmt = "i/o error: {}", _0)]
    Io(io::Error),
    #[display(fmt = "input ended before the game finished")]
    EndOfInput,
    #[display(fmt = "{} has no legal move", _0)]
    NoMove(#[error(not(source))] Color),
    #[display(fmt = "{} is not a legal move", _0)]
    IllegalMove(#[error(not(source))] Move),
}

impl From<io::Error> for PlayError {
    fn from(err: io::Error) -> Self {
        PlayError::Io(err)
    }
}

/// Failures building a [`GameConfig`](crate::GameConfig) from arguments.
#[derive(Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "unknown color {:?}: expected \"dark\" or \"light\"", _0)]
    UnknownColor(#[error(not(source))] String),
    #[display(fmt = "too many arguments")]
    TooManyArguments,
}
