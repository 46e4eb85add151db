//! Players supply moves to a game, whether typed by a human or searched for.

mod computer;
mod human;
mod player;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;
pub use player::Player;
