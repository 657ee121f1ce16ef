//! Board structure with per-player occupancy

use super::bitboard::Bitboard;
use super::{Cell, Move, Player, BOARD_SIZE, TOTAL_CELLS};
use crate::error::{GameError, IllegalReason};
use crate::rules::{self, GameStatus, WinningLine};

/// Game board
///
/// Cheap to copy, which is what the engine relies on for speculative
/// placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Human (`O`) marks
    pub human: Bitboard,
    /// Computer (`X`) marks
    pub computer: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            human: Bitboard::new(),
            computer: Bitboard::new(),
        }
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Move) -> Cell {
        if self.human.get(pos) {
            Cell::Human
        } else if self.computer.get(pos) {
            Cell::Computer
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Move) -> bool {
        !self.human.get(pos) && !self.computer.get(pos)
    }

    /// Place a mark without any legality check.
    /// Use `apply` for game moves.
    #[inline]
    pub fn place(&mut self, pos: Move, player: Player) {
        self.marks_mut(player).set(pos);
    }

    /// Apply a game move.
    ///
    /// Fails with `IllegalMove` if the game is already decided or the cell
    /// is taken. The board is untouched on failure.
    pub fn apply(&mut self, pos: Move, player: Player) -> Result<(), GameError> {
        if self.status().is_over() {
            return Err(GameError::illegal(pos, IllegalReason::GameOver));
        }
        if !self.is_empty(pos) {
            return Err(GameError::illegal(pos, IllegalReason::Occupied));
        }
        self.place(pos, player);
        Ok(())
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Terminal check: win, tie or still in progress
    #[inline]
    pub fn status(&self) -> GameStatus {
        rules::check_status(self)
    }

    /// First winning line on the board, if any
    #[inline]
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::find_winning_line(self)
    }

    /// Bitboard for a player
    #[inline]
    pub fn marks(&self, player: Player) -> Bitboard {
        match player {
            Player::Human => self.human,
            Player::Computer => self.computer,
        }
    }

    #[inline]
    fn marks_mut(&mut self, player: Player) -> &mut Bitboard {
        match player {
            Player::Human => &mut self.human,
            Player::Computer => &mut self.computer,
        }
    }

    /// Occupied cells of either player
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.human | self.computer
    }

    /// Total marks on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.occupied().count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.occupied().is_empty()
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::all().filter(move |&pos| self.is_empty(pos))
    }

    /// Build a board from four row strings using `X`, `O` and `.`
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let pos = Move::new(r as u8, c as u8);
                match ch {
                    'X' => board.place(pos, Player::Computer),
                    'O' => board.place(pos, Player::Human),
                    _ => {}
                }
            }
        }
        board
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, " ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{}", row)?;
            for col in 0..BOARD_SIZE {
                write!(f, " {}", self.get(Move::new(row as u8, col as u8)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
