//! Evaluation module for candidate cells
//!
//! The score of an empty cell rewards extending the mover's own partial
//! lines through it. It looks at the current marks only, no lookahead.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{best_scored_cell, score_cell};
pub use patterns::LineWeight;
