//! Heuristic evaluation function for Connect Four board positions
//!
//! This module provides the static evaluation used at the search horizon.
//! Terminal positions never reach it; the search scores those with fixed
//! win/loss constants instead.

use crate::board::{windows, Board, Cell, Mark, CENTER_COLUMN, WINDOW_LENGTH};

use super::patterns::{window_score, WindowScore};

/// Evaluate the board from the perspective of the given mark.
///
/// Sums the score of every length-4 window plus a bonus for each of
/// `mark`'s pieces in the centre column. Positive values favour `mark`.
///
/// # Arguments
/// * `board` - The current board state
/// * `mark` - The mark to evaluate for
#[must_use]
pub fn evaluate(board: &Board, mark: Mark) -> i64 {
    let center = board.count_in_column(CENTER_COLUMN, mark) as i64 * WindowScore::CENTER_PIECE;

    let windows_score: i64 = windows()
        .iter()
        .map(|window| {
            let cells = window.map(|pos| board.get(pos));
            evaluate_window(&cells, mark)
        })
        .sum();

    center + windows_score
}

/// Score the contents of a single window for `mark`.
pub fn evaluate_window(cells: &[Cell; WINDOW_LENGTH], mark: Mark) -> i64 {
    let mine = Cell::from(mark);
    let theirs = Cell::from(mark.opponent());

    let count = |target: Cell| cells.iter().filter(|&&c| c == target).count();
    window_score(count(mine), count(theirs), count(Cell::Empty))
}
