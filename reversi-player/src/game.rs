//! The turn loop for one game.

use crate::input::Notation;
use crate::players::{ComputerPlayer, Player};
use crate::{ConfigError, PlayError};
use reversi_board::{get_valid_moves, is_valid_move, play, BoardState, Cell, Color};
use std::fmt;
use std::io::Write;

/// Which side the human plays. Dark always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub human: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human: Color::Dark,
        }
    }
}

impl GameConfig {
    /// Build a config from command-line arguments (program name excluded).
    /// Accepts nothing, or one of "dark" / "light".
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self, ConfigError> {
        let mut args = args.into_iter();
        let human = match args.next() {
            None => Color::Dark,
            Some(arg) => match arg.to_ascii_lowercase().as_str() {
                "dark" => Color::Dark,
                "light" => Color::Light,
                _ => return Err(ConfigError::UnknownColor(arg)),
            },
        };

        if args.next().is_some() {
            return Err(ConfigError::TooManyArguments);
        }

        Ok(Self { human })
    }
}

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    pub board: BoardState,
    /// The side left without a legal move, which ended the game.
    pub immobile: Color,
}

impl GameOutcome {
    /// The side with more pieces, or None for a draw.
    pub fn winner(&self) -> Option<Color> {
        let dark = self.board.count(Cell::Dark);
        let light = self.board.count(Cell::Light);

        if dark > light {
            Some(Color::Dark)
        } else if light > dark {
            Some(Color::Light)
        } else {
            None
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} has no legal moves. Game over.", self.immobile)?;
        write!(
            f,
            "Dark {} - Light {}: ",
            self.board.count(Cell::Dark),
            self.board.count(Cell::Light)
        )?;
        match self.winner() {
            Some(winner) => write!(f, "{} wins.", winner),
            None => f.write_str("draw."),
        }
    }
}

/// Play a game from the starting position, writing the board to `out` after
/// every move.
///
/// The game ends as soon as the side due to move has no legal move; there
/// are no passes.
pub fn play_game<'a, W: Write>(
    dark: &'a mut dyn Player,
    light: &'a mut dyn Player,
    out: &mut W,
) -> Result<GameOutcome, PlayError> {
    debug_assert_eq!(dark.color(), Color::Dark);
    debug_assert_eq!(light.color(), Color::Light);

    let mut board = BoardState::new();
    let mut color = Color::Dark;
    writeln!(out, "{}\n", board)?;

    loop {
        let player = match color {
            Color::Dark => &mut *dark,
            Color::Light => &mut *light,
        };

        let mv = player.next_move(&board)?;
        if !is_valid_move(&board, mv.row, mv.col, color) {
            return Err(PlayError::IllegalMove(mv));
        }

        play(&mut board, mv, color);
        writeln!(out, "{} plays {}\n{}\n", color, Notation(mv), board)?;

        if get_valid_moves(&board, !color).is_empty() {
            return Ok(GameOutcome {
                board,
                immobile: !color,
            });
        }
        color = !color;
    }
}

/// Seat `human` on the color `config` gives it, the search on the other, and
/// play a game.
pub fn play_against_computer<W: Write>(
    config: GameConfig,
    human: &mut dyn Player,
    out: &mut W,
) -> Result<GameOutcome, PlayError> {
    debug_assert_eq!(human.color(), config.human);

    let mut computer = ComputerPlayer::new(!config.human);
    match config.human {
        Color::Dark => play_game(human, &mut computer, out),
        Color::Light => play_game(&mut computer, human, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::HumanPlayer;
    use reversi_board::Move;
    use std::io::Cursor;

    /// Replays a fixed list of moves.
    struct Scripted {
        color: Color,
        moves: Vec<Move>,
    }

    impl Player for Scripted {
        fn color(&self) -> Color {
            self.color
        }

        fn next_move(&mut self, _board: &BoardState) -> Result<Move, PlayError> {
            if self.moves.is_empty() {
                return Err(PlayError::EndOfInput);
            }
            Ok(self.moves.remove(0))
        }
    }

    #[test]
    fn config_from_args() {
        let args = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert_eq!(GameConfig::from_args(args(&[])), Ok(GameConfig::default()));
        assert_eq!(
            GameConfig::from_args(args(&["Light"])),
            Ok(GameConfig {
                human: Color::Light
            })
        );
        assert_eq!(
            GameConfig::from_args(args(&["blue"])),
            Err(ConfigError::UnknownColor("blue".to_string()))
        );
        assert_eq!(
            GameConfig::from_args(args(&["dark", "light"])),
            Err(ConfigError::TooManyArguments)
        );
    }

    #[test]
    fn computer_game_runs_to_completion() {
        let mut dark = ComputerPlayer::new(Color::Dark);
        let mut light = ComputerPlayer::new(Color::Light);
        let mut out = Vec::new();

        let outcome = play_game(&mut dark, &mut light, &mut out).unwrap();
        assert!(get_valid_moves(&outcome.board, outcome.immobile).is_empty());

        let pieces = outcome.board.count(Cell::Dark) + outcome.board.count(Cell::Light);
        assert!(pieces > 4);
        assert_eq!(pieces + outcome.board.count(Cell::Empty), 64);
    }

    #[test]
    fn game_ends_without_passing() {
        // Shortest game: dark wipes out light in nine moves.
        let line = [
            (2, 3),
            (2, 2),
            (2, 1),
            (1, 3),
            (0, 4),
            (5, 3),
            (6, 3),
            (2, 4),
            (3, 5),
        ];
        let moves = |parity: usize| {
            line.iter()
                .enumerate()
                .filter(|(i, _)| i % 2 == parity)
                .map(|(_, &(row, col))| Move { row, col })
                .collect::<Vec<Move>>()
        };
        let mut dark = Scripted {
            color: Color::Dark,
            moves: moves(0),
        };
        let mut light = Scripted {
            color: Color::Light,
            moves: moves(1),
        };

        let outcome = play_game(&mut dark, &mut light, &mut Vec::new()).unwrap();
        assert_eq!(outcome.immobile, Color::Light);
        assert_eq!(outcome.board.count(Cell::Light), 0);
        assert_eq!(outcome.winner(), Some(Color::Dark));
        assert_eq!(
            outcome.to_string(),
            "Light has no legal moves. Game over.\nDark 13 - Light 0: Dark wins."
        );
    }

    #[test]
    fn illegal_move_is_rejected() {
        let mut dark = Scripted {
            color: Color::Dark,
            moves: vec![Move { row: 0, col: 0 }],
        };
        let mut light = ComputerPlayer::new(Color::Light);

        match play_game(&mut dark, &mut light, &mut Vec::new()) {
            Err(PlayError::IllegalMove(Move { row: 0, col: 0 })) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn human_against_computer() {
        let mut human = HumanPlayer::new(Color::Dark, Cursor::new(b"3,4\n".to_vec()), Vec::new());
        let mut computer = ComputerPlayer::new(Color::Light);
        let mut out = Vec::new();

        // The human's second move never arrives.
        match play_game(&mut human, &mut computer, &mut out) {
            Err(PlayError::EndOfInput) => {}
            other => panic!("unexpected result: {:?}", other),
        }

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Dark plays 3,4"));
        assert!(transcript.contains("Light plays"));
    }

    #[test]
    fn human_can_take_light() {
        let config = GameConfig::from_args(vec!["light".to_string()]).unwrap();
        let mut human = HumanPlayer::new(Color::Light, Cursor::new(Vec::new()), Vec::new());
        let mut out = Vec::new();

        // The computer opens as dark, then the human has nothing to say.
        match play_against_computer(config, &mut human, &mut out) {
            Err(PlayError::EndOfInput) => {}
            other => panic!("unexpected result: {:?}", other),
        }

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Dark plays 3,4"));
        assert!(!transcript.contains("Light plays"));
    }

    #[test]
    fn mixed_player_types_share_the_loop() {
        let mut dark = ComputerPlayer::new(Color::Dark);
        let mut light = Scripted {
            color: Color::Light,
            moves: Vec::new(),
        };

        match play_game(&mut dark, &mut light, &mut Vec::new()) {
            Err(PlayError::EndOfInput) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
