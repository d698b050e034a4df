//! Win and draw detection for Connect Four
//!
//! A mark wins with four of its pieces in a row along any of the four
//! directions. A full board without such a run is a draw.

use crate::board::{windows, Board, Cell, Mark, Window};

/// Game state classification from one mark's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The mark has four in a row at these coordinates
    Win { mark: Mark, line: Window },
    Draw,
    Ongoing,
}

/// Find the first four-in-a-row for `mark` in window scan order.
///
/// Returns the four coordinates of the run, or `None` if `mark` has not won.
pub fn find_four_in_row(board: &Board, mark: Mark) -> Option<Window> {
    let cell = Cell::from(mark);
    windows()
        .iter()
        .find(|window| window.iter().all(|&pos| board.get(pos) == cell))
        .copied()
}

/// Check if `mark` has four in a row anywhere on the board
#[inline]
pub fn has_four_in_row(board: &Board, mark: Mark) -> bool {
    find_four_in_row(board, mark).is_some()
}

/// Check for a draw: full board and no four-in-a-row for either mark
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
        && !has_four_in_row(board, Mark::Red)
        && !has_four_in_row(board, Mark::Yellow)
}

/// Check if the game is over (either mark has won, or draw)
pub fn is_terminal(board: &Board) -> bool {
    has_four_in_row(board, Mark::Red) || has_four_in_row(board, Mark::Yellow) || board.is_full()
}

/// Check for a winner
///
/// Red is checked before Yellow. On boards reached through legal play at
/// most one mark can hold a run, so the order only matters for hand-built
/// positions.
pub fn winner(board: &Board) -> Option<(Mark, Window)> {
    [Mark::Red, Mark::Yellow]
        .into_iter()
        .find_map(|mark| find_four_in_row(board, mark).map(|line| (mark, line)))
}

/// Classify the board for `mark`, typically the mark that just moved.
pub fn check_outcome(board: &Board, mark: Mark) -> Outcome {
    if let Some(line) = find_four_in_row(board, mark) {
        Outcome::Win { mark, line }
    } else if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
