//! Win and tie detection
//!
//! Lines are stored as 16-bit masks over the row-major cell index, so a
//! line is won when a player's bitboard contains the whole mask.

use crate::board::{Bitboard, Board, Move, Player, BOARD_SIZE};

use super::GameStatus;

/// Rows, top to bottom
pub const ROW_MASKS: [Bitboard; BOARD_SIZE] = [
    Bitboard::from_bits(0x000F),
    Bitboard::from_bits(0x00F0),
    Bitboard::from_bits(0x0F00),
    Bitboard::from_bits(0xF000),
];

/// Columns, left to right
pub const COL_MASKS: [Bitboard; BOARD_SIZE] = [
    Bitboard::from_bits(0x1111),
    Bitboard::from_bits(0x2222),
    Bitboard::from_bits(0x4444),
    Bitboard::from_bits(0x8888),
];

/// (0,0) (1,1) (2,2) (3,3)
pub const MAIN_DIAGONAL: Bitboard = Bitboard::from_bits(0x8421);

/// (0,3) (1,2) (2,1) (3,0)
pub const ANTI_DIAGONAL: Bitboard = Bitboard::from_bits(0x1248);

/// All 10 lines in scan order: rows, columns, main diagonal, anti-diagonal
pub const LINE_MASKS: [Bitboard; 10] = [
    ROW_MASKS[0],
    ROW_MASKS[1],
    ROW_MASKS[2],
    ROW_MASKS[3],
    COL_MASKS[0],
    COL_MASKS[1],
    COL_MASKS[2],
    COL_MASKS[3],
    MAIN_DIAGONAL,
    ANTI_DIAGONAL,
];

/// A completed line and its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub winner: Player,
    /// Cells of the line in row-major order
    pub cells: [Move; BOARD_SIZE],
}

/// Cells of a line mask in row-major order
pub fn line_cells(mask: Bitboard) -> [Move; BOARD_SIZE] {
    let mut cells = [Move::new(0, 0); BOARD_SIZE];
    for (slot, pos) in cells.iter_mut().zip(mask.iter_ones()) {
        *slot = pos;
    }
    cells
}

/// Check if the player owns any full line
#[inline]
pub fn has_line(board: &Board, player: Player) -> bool {
    let marks = board.marks(player);
    LINE_MASKS.iter().any(|&mask| marks.contains(mask))
}

/// Find the first completed line in scan order
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    for &mask in &LINE_MASKS {
        for player in [Player::Human, Player::Computer] {
            if board.marks(player).contains(mask) {
                return Some(WinningLine {
                    winner: player,
                    cells: line_cells(mask),
                });
            }
        }
    }
    None
}

/// Derive the game status from the board
///
/// A winning line takes precedence over a full board.
pub fn check_status(board: &Board) -> GameStatus {
    if let Some(line) = find_winning_line(board) {
        return GameStatus::win_for(line.winner);
    }
    if board.is_full() {
        return GameStatus::Tie;
    }
    GameStatus::InProgress
}
