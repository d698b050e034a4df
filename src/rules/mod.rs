//! Game rules for Connect Four
//!
//! This module implements the rule set:
//! - Move legality and gravity drop
//! - Win condition (four in a row, any direction)
//! - Draw (full board without a winner)

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{apply_move, is_legal_move};
pub use win::{
    check_outcome, find_four_in_row, has_four_in_row, is_draw, is_terminal, winner, Outcome,
};
