use std::path::PathBuf;

use crate::board::Move;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalReason {
    Occupied,
    GameOver,
    OutOfBounds,
    OutOfTurn,
}

impl std::fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IllegalReason::Occupied => "cell is occupied",
            IllegalReason::GameOver => "game is over",
            IllegalReason::OutOfBounds => "outside the board",
            IllegalReason::OutOfTurn => "not this player's turn",
        };
        f.write_str(text)
    }
}

/// Errors raised by the board, the session and the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("illegal move at ({row}, {col}): {reason}")]
    IllegalMove {
        row: usize,
        col: usize,
        reason: IllegalReason,
    },

    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl GameError {
    pub(crate) fn illegal(pos: Move, reason: IllegalReason) -> Self {
        GameError::IllegalMove {
            row: pos.row as usize,
            col: pos.col as usize,
            reason,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
