//! Game rules for 4x4 tic-tac-toe
//!
//! Only full-length lines win: the 4 rows, the 4 columns and the two
//! corner-to-corner diagonals. A full board without such a line is a tie.

pub mod win;

// Re-exports for convenient access
pub use win::{
    check_status, find_winning_line, has_line, line_cells, WinningLine, ANTI_DIAGONAL, COL_MASKS,
    LINE_MASKS, MAIN_DIAGONAL, ROW_MASKS,
};

use crate::board::Player;

/// Outcome of a position, derived from the board on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    HumanWin,
    ComputerWin,
    Tie,
}

impl GameStatus {
    /// True for any terminal status
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    #[inline]
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::Human => GameStatus::HumanWin,
            Player::Computer => GameStatus::ComputerWin,
        }
    }
}
