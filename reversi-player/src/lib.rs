//! `reversi-player` runs an interactive game of Reversi against the search
//! in `reversi-search`.
//!
//! [`Player`]s supply moves, [`play_game`] alternates between them, and
//! [`input`] handles the 1-indexed `row,col` notation humans type.

pub mod game;
pub mod input;
pub mod players;

mod error;

pub use error::{ConfigError, PlayError};
pub use game::{play_against_computer, play_game, GameConfig, GameOutcome};
pub use players::{ComputerPlayer, HumanPlayer, Player};
