//! Board structure with gravity-drop columns

use std::fmt;

use super::{Cell, Mark, Pos, COLUMN_COUNT, ROW_COUNT};

/// Game board.
///
/// Cells are stored row-major with row 0 at the top. Pieces settle from the
/// bottom row (`ROW_COUNT - 1`) upward, so every column holds a contiguous
/// block of pieces ending at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLUMN_COUNT]; ROW_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLUMN_COUNT]; ROW_COUNT],
        }
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Get cell by raw row/column
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a piece can still be dropped into `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= COLUMN_COUNT`. Use [`crate::rules::is_legal_move`]
    /// for untrusted input.
    #[inline]
    pub fn is_column_playable(&self, col: usize) -> bool {
        assert!(col < COLUMN_COUNT, "column {} out of range", col);
        self.cells[0][col].is_empty()
    }

    /// Lowest empty row in `col`, or `None` when the column is full
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        (0..ROW_COUNT)
            .rev()
            .find(|&row| self.cells[row][col].is_empty())
    }

    /// Place a piece (no validity check)
    /// Use `rules::apply_move` for game moves
    #[inline]
    pub fn drop(&mut self, row: usize, col: usize, mark: Mark) {
        self.cells[row][col] = Cell::from(mark);
    }

    /// Playable columns in ascending order. Empty when the board is full.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLUMN_COUNT)
            .filter(|&col| self.is_column_playable(col))
            .collect()
    }

    /// Check if every column is full
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|cell| !cell.is_empty())
    }

    /// Number of pieces stacked in `col`
    pub fn column_height(&self, col: usize) -> usize {
        (0..ROW_COUNT)
            .filter(|&row| !self.cells[row][col].is_empty())
            .count()
    }

    /// Total pieces on board
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Number of pieces `mark` has in `col`
    pub fn count_in_column(&self, col: usize, mark: Mark) -> usize {
        let cell = Cell::from(mark);
        (0..ROW_COUNT)
            .filter(|&row| self.cells[row][col] == cell)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Top row first, `R`/`Y` for pieces and `.` for empty cells
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for col in 0..COLUMN_COUNT {
            write!(f, " {}", col + 1)?;
        }
        writeln!(f)?;
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    Cell::Red => 'R',
                    Cell::Yellow => 'Y',
                    Cell::Empty => '.',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
