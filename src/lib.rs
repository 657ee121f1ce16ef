//! 4x4 tic-tac-toe against a rule-based AI
//!
//! The board is 4x4 and only complete lines of four win: the 4 rows, the 4
//! columns and the two long diagonals. A full board without such a line is
//! a tie. The human plays `O` and moves first; the computer plays `X`.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with one 16-bit bitboard per player
//! - [`rules`]: Win and tie detection ([`GameStatus`])
//! - [`eval`]: Heuristic scoring of empty cells
//! - [`engine`]: The AI move cascade
//! - [`game`]: Session that owns the board and enforces turn order
//! - [`config`]: TOML configuration for the GUI
//! - [`ui`]: egui/eframe front-end
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! let status = game.apply_human_move(1, 1).unwrap();
//! assert_eq!(status, GameStatus::InProgress);
//!
//! let (pos, status) = game.apply_ai_move().unwrap();
//! println!("AI plays at {} -> {:?}", pos, status);
//! ```
//!
//! # Move Priority
//!
//! The engine follows this cascade:
//! 1. Immediate winning move
//! 2. Block the human's immediate win
//! 3. Highest heuristic score (ties go to the earliest cell)
//! 4. Center, then corners, then any free cell

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Move, Player, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult, Rule};
pub use error::{ConfigError, GameError, IllegalReason};
pub use game::Game;
pub use rules::GameStatus;
