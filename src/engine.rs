//! Main AI Engine wrapping the alpha-beta search
//!
//! This module provides the entry point the game controller uses to pick the
//! computer's column. Every decision runs a fresh full-window search from the
//! current position; nothing is cached between moves.
//!
//! # Example
//!
//! ```
//! use connect4::{AIEngine, Board, Mark};
//!
//! let mut engine = AIEngine::with_depth(3);
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board, Mark::Yellow);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use crate::board::{Board, Mark};
use crate::error::EngineError;
use crate::search::{alpha_beta, INF};
use std::time::Instant;

/// Default search depth in plies
pub const DEFAULT_DEPTH: u32 = 4;

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best column found, `None` when the board has no legal column
    pub best_move: Option<usize>,
    /// Search value of the position for the mover
    pub score: i64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Pick the column for `mark` by searching `depth` plies.
///
/// A depth of 0 is treated as 1 so that a column is always produced.
///
/// # Errors
///
/// [`EngineError::NoLegalMoves`] if every column is full.
pub fn choose_move(board: &Board, depth: u32, mark: Mark) -> Result<usize, EngineError> {
    if board.legal_columns().is_empty() {
        return Err(EngineError::NoLegalMoves);
    }
    let result = alpha_beta(board, depth.max(1), -INF, INF, true, mark);
    result.best_move.ok_or(EngineError::NoLegalMoves)
}

/// Connect Four AI engine.
///
/// Holds the search depth. The engine never mutates the board it is given.
///
/// # Example
///
/// ```
/// use connect4::{AIEngine, Board, Mark};
///
/// let mut engine = AIEngine::new();
/// let board = Board::new();
/// if let Some(column) = engine.get_move(&board, Mark::Red) {
///     println!("Play column {}", column + 1);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AIEngine {
    depth: u32,
}

impl AIEngine {
    /// Create a new AI engine searching [`DEFAULT_DEPTH`] plies.
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create an AI engine with a custom depth (0 is raised to 1).
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        Self {
            depth: depth.max(1),
        }
    }

    /// Get the best column for the given position.
    ///
    /// Returns `None` if the board has no legal column.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        self.get_move_with_stats(board, mark).best_move
    }

    /// Get the best column with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, mark: Mark) -> MoveResult {
        let start = Instant::now();

        if board.legal_columns().is_empty() {
            log::debug!("{} has no legal column", mark.name());
            return MoveResult {
                best_move: None,
                score: 0,
                time_ms: start.elapsed().as_millis() as u64,
                nodes: 0,
            };
        }

        let result = alpha_beta(board, self.depth, -INF, INF, true, mark);
        let time_ms = start.elapsed().as_millis() as u64;

        log::debug!(
            "{} search depth={} column={:?} score={} nodes={} cutoffs={} time={}ms",
            mark.name(),
            self.depth,
            result.best_move,
            result.score,
            result.nodes,
            result.cutoffs,
            time_ms
        );

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.nodes,
        }
    }

    /// Set the search depth (0 is raised to 1).
    pub fn set_depth(&mut self, depth: u32) {
        self.depth = depth.max(1);
    }

    /// Get the current search depth.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
