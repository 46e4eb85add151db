//! `reversi-search` picks the computer's move with a fixed-depth minimax
//! search and alpha-beta pruning.
//!
//! Every call is self-contained: positions are explored on private copies of
//! the board and nothing is remembered between calls.

pub mod search;

use arrayvec::ArrayVec;
use reversi_board::{get_valid_moves, BoardState, Color, Move, NUM_SPACES};

pub use search::SearchStats;

/// Plies searched below each candidate move.
pub const SEARCH_DEPTH: u32 = 3;

/// The outcome of searching one position.
#[derive(Clone, Debug, Default)]
pub struct SearchResult {
    /// Every legal move with its minimax score, in row-major order.
    pub scores: ArrayVec<(Move, i32), NUM_SPACES>,
    pub stats: SearchStats,
}

impl SearchResult {
    /// The highest-scoring move. Ties go to the earliest move.
    pub fn best(&self) -> Option<(Move, i32)> {
        let mut best: Option<(Move, i32)> = None;
        for &(mv, score) in &self.scores {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((mv, score)),
            }
        }

        best
    }
}

/// Score every legal move for `color` by searching [`SEARCH_DEPTH`] plies
/// below it, opponent to reply.
pub fn search(board: &BoardState, color: Color) -> SearchResult {
    let mut stats = SearchStats::default();

    let scores = search::children(board, get_valid_moves(board, color), color)
        .map(|(mv, child)| {
            let score = search::window(
                &child,
                color,
                SEARCH_DEPTH,
                false,
                i32::MIN,
                i32::MAX,
                &mut stats,
            );
            (mv, score)
        })
        .collect();

    SearchResult { scores, stats }
}

/// Choose a move for `color`, or None if it has no legal moves.
pub fn choose_move(board: &BoardState, color: Color) -> Option<Move> {
    search(board, color).best().map(|(mv, _)| mv)
}

/// Minimax value of `board` for `color`, searching `depth` plies with the
/// given alpha-beta window. `maximizing` selects whether `color` or its
/// opponent moves first.
pub fn minimax(
    board: &BoardState,
    color: Color,
    depth: u32,
    maximizing: bool,
    alpha: i32,
    beta: i32,
) -> i32 {
    search::window(
        board,
        color,
        depth,
        maximizing,
        alpha,
        beta,
        &mut SearchStats::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_board::Cell;

    #[test]
    fn no_moves_gives_none() {
        let mut board = BoardState::empty();
        board.set(0, 0, Cell::Dark);
        assert_eq!(choose_move(&board, Color::Dark), None);
        assert_eq!(choose_move(&board, Color::Light), None);
        assert!(search(&board, Color::Dark).scores.is_empty());
    }

    #[test]
    fn single_move_is_chosen() {
        let mut board = BoardState::empty();
        board.set(0, 0, Cell::Dark);
        board.set(0, 1, Cell::Light);

        assert_eq!(get_valid_moves(&board, Color::Dark).len(), 1);
        assert_eq!(
            choose_move(&board, Color::Dark),
            Some(Move { row: 0, col: 2 })
        );
    }

    #[test]
    fn ties_go_to_first_move() {
        // The opening is symmetric, so every move scores the same.
        let result = search(&BoardState::new(), Color::Dark);
        assert_eq!(result.scores.len(), 4);

        let first_score = result.scores[0].1;
        assert!(result.scores.iter().all(|&(_, score)| score == first_score));
        assert_eq!(result.best(), Some((Move { row: 2, col: 3 }, first_score)));
    }

    #[test]
    fn strictly_better_move_wins() {
        let result = SearchResult {
            scores: [
                (Move { row: 0, col: 0 }, 3),
                (Move { row: 0, col: 1 }, 5),
                (Move { row: 0, col: 2 }, 5),
                (Move { row: 0, col: 3 }, 4),
            ]
            .iter()
            .copied()
            .collect(),
            stats: SearchStats::default(),
        };
        assert_eq!(result.best(), Some((Move { row: 0, col: 1 }, 5)));
    }

    #[test]
    fn search_does_not_touch_board() {
        let board = BoardState::new();
        let before = board;
        choose_move(&board, Color::Light);
        assert_eq!(board, before);
    }

    #[test]
    fn chosen_move_is_legal() {
        let mut board = BoardState::new();
        let mut color = Color::Dark;

        for _ in 0..10 {
            let mv = match choose_move(&board, color) {
                Some(mv) => mv,
                None => break,
            };
            assert!(get_valid_moves(&board, color).contains(mv));
            reversi_board::play(&mut board, mv, color);
            color = !color;
        }
    }
}
