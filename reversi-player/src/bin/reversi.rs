use reversi_player::{play_against_computer, GameConfig, HumanPlayer, PlayError};
use std::io::{self, Write};
use std::process;

fn run(config: GameConfig) -> Result<(), PlayError> {
    let stdin = io::stdin();
    let mut human = HumanPlayer::new(config.human, stdin.lock(), io::stdout());
    let mut out = io::stdout();

    writeln!(out, "=== Reversi ===")?;
    writeln!(out, "You play {}. Enter moves as row,col (e.g. 3,4).\n", config.human)?;

    let outcome = play_against_computer(config, &mut human, &mut out)?;
    writeln!(out, "{}", outcome)?;
    Ok(())
}

fn main() {
    let config = match GameConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("usage: reversi [dark|light]\n{}", err);
            process::exit(2);
        }
    };

    if let Err(err) = run(config) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
