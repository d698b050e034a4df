//! Board representation for Connect Four

pub mod board;
pub mod window;


// Re-exports
pub use board::Board;
pub use window::{windows, Window, WINDOW_COUNT};

/// Board height (rows)
pub const ROW_COUNT: usize = 6;
/// Board width (columns)
pub const COLUMN_COUNT: usize = 7;
/// Run length needed to win
pub const WINDOW_LENGTH: usize = 4;
/// Column with the most windows through it
pub const CENTER_COLUMN: usize = COLUMN_COUNT / 2;
pub const TOTAL_CELLS: usize = ROW_COUNT * COLUMN_COUNT; // 42

/// Player marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// Player one, moves first
    Red,
    /// Player two
    Yellow,
}

impl Mark {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::Red => Mark::Yellow,
            Mark::Yellow => Mark::Red,
        }
    }

    /// 1-based player number, as shown to humans
    #[inline]
    pub fn number(self) -> u8 {
        match self {
            Mark::Red => 1,
            Mark::Yellow => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mark::Red => "Red",
            Mark::Yellow => "Yellow",
        }
    }
}

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Mark occupying this cell, if any
    #[inline]
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Mark::Red),
            Cell::Yellow => Some(Mark::Yellow),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Mark> for Cell {
    #[inline]
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Red => Cell::Red,
            Mark::Yellow => Cell::Yellow,
        }
    }
}

/// Position on the board. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < ROW_COUNT && (col as usize) < COLUMN_COUNT);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * COLUMN_COUNT + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / COLUMN_COUNT) as u8,
            col: (idx % COLUMN_COUNT) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < ROW_COUNT as i32 && col >= 0 && col < COLUMN_COUNT as i32
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
