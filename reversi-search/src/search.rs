//! Internal search functions.

use reversi_board::{evaluate, get_valid_moves, play, BoardState, Color, Move, MoveList};

/// Counters collected over one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, including leaves.
    pub nodes: u64,
    /// Plies cut short because the window closed.
    pub cutoffs: u64,
}

/// Pair each move in `moves` with a copy of `board` after `color` plays it.
pub fn children(
    board: &BoardState,
    moves: MoveList,
    color: Color,
) -> impl Iterator<Item = (Move, BoardState)> {
    let board = *board;
    moves.into_iter().map(move |mv| {
        let mut child = board;
        play(&mut child, mv, color);
        (mv, child)
    })
}

/// Alpha-beta minimax. `color` is the searching side: it moves on maximizing
/// plies, its opponent on minimizing plies, and every leaf is scored by
/// `color`'s piece count.
///
/// A ply is a leaf when `depth` is exhausted or the side to move there has
/// no legal moves.
pub fn window(
    board: &BoardState,
    color: Color,
    depth: u32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if depth == 0 {
        return evaluate(board, color);
    }

    let mover = if maximizing { color } else { !color };
    let moves = get_valid_moves(board, mover);
    if moves.is_empty() {
        return evaluate(board, color);
    }

    if maximizing {
        let mut max_score = i32::MIN;
        for (_, child) in children(board, moves, mover) {
            let score = window(&child, color, depth - 1, false, alpha, beta, stats);
            max_score = max_score.max(score);
            alpha = alpha.max(score);

            // Fail high: the minimizer above already has a better option.
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        max_score
    } else {
        let mut min_score = i32::MAX;
        for (_, child) in children(board, moves, mover) {
            let score = window(&child, color, depth - 1, true, alpha, beta, stats);
            min_score = min_score.min(score);
            beta = beta.min(score);

            // Fail low: the maximizer above already has a better option.
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        min_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_window(board: &BoardState, color: Color, depth: u32, maximizing: bool) -> i32 {
        window(
            board,
            color,
            depth,
            maximizing,
            i32::MIN,
            i32::MAX,
            &mut SearchStats::default(),
        )
    }

    #[test]
    fn depth_zero_is_material() {
        assert_eq!(full_window(&BoardState::new(), Color::Dark, 0, true), 2);
    }

    #[test]
    fn maximizing_ply_takes_best_reply() {
        // Every opening move leaves dark with four pieces.
        assert_eq!(full_window(&BoardState::new(), Color::Dark, 1, true), 4);
    }

    #[test]
    fn minimizing_ply_scores_searching_color() {
        // Light moves, and every reply leaves dark with one piece.
        assert_eq!(full_window(&BoardState::new(), Color::Dark, 1, false), 1);
    }

    #[test]
    fn immobile_side_ends_search() {
        let mut board = BoardState::empty();
        board.set(0, 0, reversi_board::Cell::Dark);
        board.set(0, 1, reversi_board::Cell::Light);

        // Light cannot move, so the minimizing ply is a leaf.
        let mut stats = SearchStats::default();
        let score = window(&board, Color::Dark, 3, false, i32::MIN, i32::MAX, &mut stats);
        assert_eq!(score, 1);
        assert_eq!(stats.nodes, 1);
    }

    #[test]
    fn children_leave_parent_untouched() {
        let board = BoardState::new();
        let moves = get_valid_moves(&board, Color::Dark);
        let kids: Vec<(Move, BoardState)> = children(&board, moves, Color::Dark).collect();

        assert_eq!(kids.len(), 4);
        assert_eq!(board, BoardState::new());
        for (mv, child) in kids {
            assert_eq!(child.get(mv.row, mv.col), reversi_board::Cell::Dark);
        }
    }
}
