//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking move generation against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::board::{BoardState, Color};
use crate::rules::{get_valid_moves, play};

/// Count the leaves `depth` plies below the starting position, Dark to move.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(BoardState::new(), Color::Dark, depth, false)
}

fn leaves_below(board: BoardState, color: Color, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = get_valid_moves(&board, color);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !color, depth - 1, true);
    }

    all_moves
        .into_iter()
        .map(|mv| {
            let mut child = board;
            play(&mut child, mv, color);
            leaves_below(child, !color, depth - 1, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}
