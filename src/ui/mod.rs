//! GUI module for the game
//!
//! This module provides a native Rust GUI using egui/eframe. It only draws
//! the session's state and forwards clicks; all rules live in the core.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::TicTacToeApp;
pub use game_state::{AiState, GameState};
