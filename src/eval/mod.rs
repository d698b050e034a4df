//! Evaluation module for Connect Four positions
//!
//! This module provides window scoring for non-terminal board positions.
//! The evaluation considers:
//! - Every length-4 window (horizontal, vertical, both diagonals)
//! - Opponent three-with-a-gap threats
//! - Centre column occupancy

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_window};
pub use patterns::WindowScore;
