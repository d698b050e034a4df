//! Connect Four engine with an alpha-beta computer opponent
//!
//! Standard rules:
//! - 6 rows by 7 columns, pieces fall to the lowest empty cell
//! - Four in a row horizontally, vertically or diagonally wins
//! - A full board without four in a row is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board grid, marks, and the table of length-4 windows
//! - [`rules`]: Move legality and terminal detection
//! - [`eval`]: Window heuristic for non-terminal positions
//! - [`search`]: Alpha-beta minimax
//! - [`engine`]: Move-choosing facade used by the game controller
//! - [`config`]: TOML game configuration
//! - [`ui`]: egui frontend
//!
//! # Quick Start
//!
//! ```
//! use connect4::{apply_move, check_outcome, choose_move, Board, Mark, Outcome};
//!
//! let mut board = Board::new();
//! board = apply_move(&board, 3, Mark::Red).unwrap();
//!
//! let reply = choose_move(&board, 4, Mark::Yellow).unwrap();
//! board = apply_move(&board, reply, Mark::Yellow).unwrap();
//!
//! assert_eq!(check_outcome(&board, Mark::Yellow), Outcome::Ongoing);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Mark, Pos, COLUMN_COUNT, ROW_COUNT};
pub use engine::{choose_move, AIEngine, MoveResult};
pub use error::{ConfigError, EngineError, MoveError};
pub use rules::{apply_move, check_outcome, is_legal_move, Outcome};
