//! Move legality and application

use crate::board::{Board, Mark, COLUMN_COUNT};
use crate::error::MoveError;

/// Check if a piece may be dropped into `column`.
///
/// Out-of-range columns are rejected here rather than treated as a panic,
/// so this is the gate for untrusted input (mouse, keyboard, CLI).
#[inline]
pub fn is_legal_move(board: &Board, column: usize) -> bool {
    column < COLUMN_COUNT && board.is_column_playable(column)
}

/// Drop `mark` into `column` and return the resulting board.
///
/// The input board is left untouched.
///
/// # Errors
///
/// `MoveError::InvalidColumn` if `column` is off the board,
/// `MoveError::ColumnFull` if the column has no open row.
pub fn apply_move(board: &Board, column: usize, mark: Mark) -> Result<Board, MoveError> {
    if column >= COLUMN_COUNT {
        return Err(MoveError::InvalidColumn(column));
    }
    let row = board
        .next_open_row(column)
        .ok_or(MoveError::ColumnFull(column))?;

    let mut next = *board;
    next.drop(row, column, mark);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Pos, ROW_COUNT};

    #[test]
    fn test_is_legal_move_bounds() {
        let board = Board::new();
        assert!(is_legal_move(&board, 0));
        assert!(is_legal_move(&board, COLUMN_COUNT - 1));
        assert!(!is_legal_move(&board, COLUMN_COUNT));
        assert!(!is_legal_move(&board, usize::MAX));
    }

    #[test]
    fn test_apply_move_lands_at_bottom() {
        let board = Board::new();
        let next = apply_move(&board, 3, Mark::Red).unwrap();
        assert_eq!(next.get(Pos::new(5, 3)), Cell::Red);
        // Input board untouched
        assert_eq!(board.get(Pos::new(5, 3)), Cell::Empty);
    }

    #[test]
    fn test_apply_move_stacks() {
        let mut board = Board::new();
        for expected_row in (0..ROW_COUNT).rev() {
            assert_eq!(board.next_open_row(1), Some(expected_row));
            board = apply_move(&board, 1, Mark::Yellow).unwrap();
        }
        assert!(!is_legal_move(&board, 1));
        assert_eq!(
            apply_move(&board, 1, Mark::Red),
            Err(MoveError::ColumnFull(1))
        );
    }

    #[test]
    fn test_apply_move_invalid_column() {
        let board = Board::new();
        assert_eq!(
            apply_move(&board, 7, Mark::Red),
            Err(MoveError::InvalidColumn(7))
        );
    }
}
