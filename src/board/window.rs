//! Length-4 windows over the board
//!
//! Both win detection and the heuristic walk the same precomputed table, so
//! the first winning run reported for a mark is always the first matching
//! window in this order:
//!
//! 1. Horizontal, row-major (rows top to bottom, start column left to right)
//! 2. Vertical, column-major (columns left to right, start row top to bottom)
//! 3. Diagonal `\`, start cells row-major, cells top-left to bottom-right
//! 4. Diagonal `/`, start cells row-major, cells top-right to bottom-left

use super::{Pos, COLUMN_COUNT, ROW_COUNT, WINDOW_LENGTH};

/// Four board coordinates forming a straight run
pub type Window = [Pos; WINDOW_LENGTH];

const H_STARTS: usize = COLUMN_COUNT - WINDOW_LENGTH + 1;
const V_STARTS: usize = ROW_COUNT - WINDOW_LENGTH + 1;

const HORIZONTAL_COUNT: usize = ROW_COUNT * H_STARTS;
const VERTICAL_COUNT: usize = COLUMN_COUNT * V_STARTS;
const DIAGONAL_COUNT: usize = V_STARTS * H_STARTS;

/// Total number of windows on the board (69 for 6×7)
pub const WINDOW_COUNT: usize = HORIZONTAL_COUNT + VERTICAL_COUNT + 2 * DIAGONAL_COUNT;

static WINDOWS: [Window; WINDOW_COUNT] = build_windows();

/// All windows in scan order
#[inline]
pub fn windows() -> &'static [Window] {
    &WINDOWS
}

const fn pos(row: usize, col: usize) -> Pos {
    Pos {
        row: row as u8,
        col: col as u8,
    }
}

const fn run(row: usize, col: usize, dr: isize, dc: isize) -> Window {
    let mut window = [pos(0, 0); WINDOW_LENGTH];
    let mut i = 0;
    while i < WINDOW_LENGTH {
        let r = row as isize + dr * i as isize;
        let c = col as isize + dc * i as isize;
        window[i] = pos(r as usize, c as usize);
        i += 1;
    }
    window
}

const fn build_windows() -> [Window; WINDOW_COUNT] {
    let mut table = [[pos(0, 0); WINDOW_LENGTH]; WINDOW_COUNT];
    let mut n = 0;

    // Horizontal
    let mut row = 0;
    while row < ROW_COUNT {
        let mut col = 0;
        while col < H_STARTS {
            table[n] = run(row, col, 0, 1);
            n += 1;
            col += 1;
        }
        row += 1;
    }

    // Vertical
    let mut col = 0;
    while col < COLUMN_COUNT {
        let mut row = 0;
        while row < V_STARTS {
            table[n] = run(row, col, 1, 0);
            n += 1;
            row += 1;
        }
        col += 1;
    }

    // Diagonal \
    let mut row = 0;
    while row < V_STARTS {
        let mut col = 0;
        while col < H_STARTS {
            table[n] = run(row, col, 1, 1);
            n += 1;
            col += 1;
        }
        row += 1;
    }

    // Diagonal /
    let mut row = 0;
    while row < V_STARTS {
        let mut col = 0;
        while col < H_STARTS {
            table[n] = run(row, col + WINDOW_LENGTH - 1, 1, -1);
            n += 1;
            col += 1;
        }
        row += 1;
    }

    table
}
