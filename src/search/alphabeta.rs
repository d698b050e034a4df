//! Alpha-Beta minimax search
//!
//! This module implements the search algorithm for the Connect Four AI:
//! depth-limited minimax with alpha-beta pruning, always scored from the
//! maximizer's perspective.
//!
//! # Features
//!
//! - Fixed win/loss constants independent of remaining depth
//! - Ascending column order with strict-improvement updates, so ties resolve
//!   to the lowest column index
//! - Each explored move works on its own board copy
//! - Unpruned [`minimax`] with identical tie-break for cross-checking
//!
//! # Example
//!
//! ```
//! use connect4::board::{Board, Mark};
//! use connect4::search::{alpha_beta, INF};
//!
//! let board = Board::new();
//! let result = alpha_beta(&board, 4, -INF, INF, true, Mark::Yellow);
//! if let Some(column) = result.best_move {
//!     println!("Best move: column {}", column);
//! }
//! ```

use crate::board::{Board, Mark};
use crate::eval::evaluate;
use crate::rules::has_four_in_row;

/// Score of a position the maximizer has won
pub const WIN_SCORE: i64 = 100_000_000_000_000;

/// Score of a position the maximizer has lost
pub const LOSS_SCORE: i64 = -WIN_SCORE;

/// Infinity score for alpha-beta bounds
pub const INF: i64 = i64::MAX;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best column, `None` at leaf positions (depth 0 or terminal)
    pub best_move: Option<usize>,
    /// Value of the position for the maximizer
    pub score: i64,
    /// Total nodes searched
    pub nodes: u64,
    /// Times a node stopped scanning columns early
    pub cutoffs: u64,
}

/// Per-call search state. Holds counters only; positions live on the stack.
struct Searcher {
    maximizer: Mark,
    prune: bool,
    nodes: u64,
    cutoffs: u64,
}

impl Searcher {
    fn new(maximizer: Mark, prune: bool) -> Self {
        Self {
            maximizer,
            prune,
            nodes: 0,
            cutoffs: 0,
        }
    }

    fn finish(self, (best_move, score): (Option<usize>, i64)) -> SearchResult {
        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
            cutoffs: self.cutoffs,
        }
    }

    /// Fixed value for a finished game, `None` while play continues
    fn terminal_value(&self, board: &Board) -> Option<i64> {
        if has_four_in_row(board, self.maximizer) {
            Some(WIN_SCORE)
        } else if has_four_in_row(board, self.maximizer.opponent()) {
            Some(LOSS_SCORE)
        } else if board.is_full() {
            Some(0)
        } else {
            None
        }
    }

    fn search(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> (Option<usize>, i64) {
        self.nodes += 1;

        if let Some(value) = self.terminal_value(board) {
            return (None, value);
        }
        if depth == 0 {
            return (None, evaluate(board, self.maximizer));
        }

        let columns = board.legal_columns();
        // Non-terminal, so at least one column is open
        let Some(&first) = columns.first() else {
            return (None, 0);
        };

        let mover = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };
        let mut best_move = first;
        let mut value = if maximizing { -INF } else { INF };

        for col in columns {
            let Some(row) = board.next_open_row(col) else {
                continue;
            };
            let mut child = *board;
            child.drop(row, col, mover);

            let (_, score) = self.search(&child, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                if score > value {
                    value = score;
                    best_move = col;
                }
                alpha = alpha.max(value);
            } else {
                if score < value {
                    value = score;
                    best_move = col;
                }
                beta = beta.min(value);
            }

            if self.prune && alpha >= beta {
                self.cutoffs += 1;
                break;
            }
        }

        (Some(best_move), value)
    }
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Scores are always from `maximizer`'s point of view: a maximizer win is
/// [`WIN_SCORE`], a minimizer win [`LOSS_SCORE`], a draw 0, and horizon
/// positions use [`evaluate`] for `maximizer`. When `maximizing` is true the
/// maximizer's mark is dropped at this node, otherwise its opponent's.
///
/// The board is never modified. Columns are scanned in ascending order and
/// only a strictly better score replaces the running best, so among equal
/// scores the lowest column wins.
#[must_use]
pub fn alpha_beta(
    board: &Board,
    depth: u32,
    alpha: i64,
    beta: i64,
    maximizing: bool,
    maximizer: Mark,
) -> SearchResult {
    let mut searcher = Searcher::new(maximizer, true);
    let best = searcher.search(board, depth, alpha, beta, maximizing);
    searcher.finish(best)
}

/// Plain minimax: the same recursion as [`alpha_beta`] without pruning.
///
/// Visits every node up to `depth`; used to cross-check pruned results and as
/// a node-count baseline.
#[must_use]
pub fn minimax(board: &Board, depth: u32, maximizing: bool, maximizer: Mark) -> SearchResult {
    let mut searcher = Searcher::new(maximizer, false);
    let best = searcher.search(board, depth, -INF, INF, maximizing);
    searcher.finish(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CENTER_COLUMN;

    /// Red holds the bottom row at columns 0-2, Yellow sits on two of them.
    fn red_threatens_column_3() -> Board {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop(5, col, Mark::Red);
        }
        board.drop(4, 0, Mark::Yellow);
        board.drop(4, 1, Mark::Yellow);
        board
    }

    #[test]
    fn test_search_empty_board_prefers_center() {
        let board = Board::new();
        let result = alpha_beta(&board, 1, -INF, INF, true, Mark::Red);
        assert_eq!(result.best_move, Some(CENTER_COLUMN));
        assert_eq!(result.score, 3);
    }

    #[test]
    fn test_search_finds_winning_move() {
        let board = red_threatens_column_3();
        for depth in 1..=4 {
            let result = alpha_beta(&board, depth, -INF, INF, true, Mark::Red);
            assert_eq!(result.best_move, Some(3), "depth {}", depth);
            assert_eq!(result.score, WIN_SCORE, "depth {}", depth);
        }
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        // Same shape with colours swapped; Red must block column 3
        let mut board = Board::new();
        for col in 0..3 {
            board.drop(5, col, Mark::Yellow);
        }
        board.drop(4, 0, Mark::Red);
        board.drop(4, 1, Mark::Red);

        let result = alpha_beta(&board, 2, -INF, INF, true, Mark::Red);
        assert_eq!(result.best_move, Some(3));
        assert!(result.score > LOSS_SCORE);
    }

    #[test]
    fn test_search_without_block_sees_loss() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop(5, col, Mark::Yellow);
        }
        board.drop(4, 0, Mark::Red);
        board.drop(4, 1, Mark::Red);
        // Red plays away from the threat; Yellow then completes the row
        let mut after = board;
        after.drop(5, 6, Mark::Red);
        let reply = alpha_beta(&after, 1, -INF, INF, false, Mark::Red);
        assert_eq!(reply.best_move, Some(3));
        assert_eq!(reply.score, LOSS_SCORE);
    }

    #[test]
    fn test_search_minimizing_root_takes_win() {
        let mut board = red_threatens_column_3();
        board.drop(3, 0, Mark::Yellow);
        // Yellow is the maximizer, so Red moves at a minimizing root
        let result = alpha_beta(&board, 1, -INF, INF, false, Mark::Yellow);
        assert_eq!(result.best_move, Some(3));
        assert_eq!(result.score, LOSS_SCORE);
    }

    #[test]
    fn test_ties_pick_lowest_column() {
        // Every yellow reply leaves Red's evaluation at 0
        let board = Board::new();
        let result = alpha_beta(&board, 1, -INF, INF, false, Mark::Red);
        assert_eq!(result.best_move, Some(0));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_depth_zero_evaluates() {
        let mut board = Board::new();
        board.drop(5, CENTER_COLUMN, Mark::Yellow);
        let result = alpha_beta(&board, 0, -INF, INF, true, Mark::Yellow);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, evaluate(&board, Mark::Yellow));
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_terminal_win_ignores_depth() {
        let mut board = Board::new();
        for row in 2..6 {
            board.drop(row, 0, Mark::Red);
        }
        assert_eq!(alpha_beta(&board, 0, -INF, INF, true, Mark::Red).score, WIN_SCORE);
        assert_eq!(alpha_beta(&board, 3, -INF, INF, true, Mark::Red).score, WIN_SCORE);
        assert_eq!(alpha_beta(&board, 3, -INF, INF, true, Mark::Yellow).score, LOSS_SCORE);
    }

    #[test]
    fn test_search_does_not_mutate_board() {
        let board = red_threatens_column_3();
        let before = board;
        let _ = alpha_beta(&board, 4, -INF, INF, true, Mark::Yellow);
        let _ = minimax(&board, 3, true, Mark::Yellow);
        assert_eq!(board, before);
    }

    #[test]
    fn test_pruning_matches_minimax() {
        let mut board = Board::new();
        board.drop(5, 3, Mark::Red);
        board.drop(5, 2, Mark::Yellow);
        board.drop(4, 3, Mark::Red);

        for depth in 1..=4 {
            for maximizing in [true, false] {
                let pruned = alpha_beta(&board, depth, -INF, INF, maximizing, Mark::Yellow);
                let full = minimax(&board, depth, maximizing, Mark::Yellow);
                assert_eq!(pruned.score, full.score, "depth {}", depth);
                assert_eq!(pruned.best_move, full.best_move, "depth {}", depth);
                assert!(pruned.nodes <= full.nodes);
            }
        }
    }

    #[test]
    fn test_pruning_reduces_nodes() {
        let board = Board::new();
        let pruned = alpha_beta(&board, 4, -INF, INF, true, Mark::Red);
        let full = minimax(&board, 4, true, Mark::Red);
        // 1 + 7 + 49 + 343 + 2401 nodes without pruning
        assert_eq!(full.nodes, 2801);
        assert!(pruned.nodes < full.nodes);
        assert!(pruned.cutoffs > 0);
        assert_eq!(full.cutoffs, 0);
    }
}
