//! Search module for the Connect Four AI
//!
//! Contains:
//! - Alpha-Beta minimax over gravity drops
//! - Unpruned minimax for cross-checking and benchmarks

pub mod alphabeta;

pub use alphabeta::{alpha_beta, minimax, SearchResult, INF, LOSS_SCORE, WIN_SCORE};
