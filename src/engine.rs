//! Rule-based AI engine
//!
//! The engine picks a move by walking a fixed cascade; the first rule that
//! produces a cell wins and later rules are not consulted:
//!
//! 1. **Immediate win**: a cell that completes one of our lines
//! 2. **Block**: a cell that would complete one of the opponent's lines
//! 3. **Strategic**: the highest [`score_cell`](crate::eval::score_cell)
//! 4. **Center**: first free cell of [`CENTER_CELLS`]
//! 5. **Corner**: first free cell of [`CORNER_CELLS`]
//! 6. **Any cell**: first free cell in row-major order
//!
//! Speculative placements are made on a copy of the board, so the caller's
//! board is never touched.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, Board, Move, Player};
//!
//! let engine = AIEngine::new();
//! let mut board = Board::new();
//! board.place(Move::new(0, 0), Player::Computer);
//! board.place(Move::new(0, 1), Player::Computer);
//! board.place(Move::new(0, 2), Player::Computer);
//!
//! let pos = engine.select_move(&board).unwrap();
//! assert_eq!(pos, Move::new(0, 3));
//! ```

use log::debug;

use crate::board::{Board, Move, Player};
use crate::error::GameError;
use crate::eval::best_scored_cell;
use crate::rules::has_line;

/// Center cells in preference order
pub const CENTER_CELLS: [Move; 4] = [
    Move { row: 1, col: 1 },
    Move { row: 1, col: 2 },
    Move { row: 2, col: 1 },
    Move { row: 2, col: 2 },
];

/// Corner cells in preference order
pub const CORNER_CELLS: [Move; 4] = [
    Move { row: 0, col: 0 },
    Move { row: 0, col: 3 },
    Move { row: 3, col: 0 },
    Move { row: 3, col: 3 },
];

/// Cascade rule that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Completes one of our lines
    ImmediateWin,
    /// Takes the cell the opponent needs to complete a line
    Block,
    /// Highest heuristic score
    Strategic,
    /// Center fallback
    Center,
    /// Corner fallback
    Corner,
    /// First free cell
    AnyCell,
}

/// Result of a move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub best_move: Move,
    pub rule: Rule,
    /// Heuristic score, only set for [`Rule::Strategic`]
    pub score: Option<i32>,
}

impl MoveResult {
    #[inline]
    fn from_rule(pos: Move, rule: Rule) -> Self {
        Self {
            best_move: pos,
            rule,
            score: None,
        }
    }

    #[inline]
    fn strategic(pos: Move, score: i32) -> Self {
        Self {
            best_move: pos,
            rule: Rule::Strategic,
            score: Some(score),
        }
    }
}

/// Main AI engine.
///
/// Stateless apart from the side it plays; selection is deterministic for a
/// given board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AIEngine {
    player: Player,
}

impl AIEngine {
    /// Engine playing the computer side.
    #[must_use]
    pub fn new() -> Self {
        Self::for_player(Player::Computer)
    }

    #[must_use]
    pub fn for_player(player: Player) -> Self {
        Self { player }
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Select the next move.
    ///
    /// Fails with `InvariantViolation` when the board has no empty cell.
    pub fn select_move(&self, board: &Board) -> Result<Move, GameError> {
        self.select_move_with_stats(board).map(|result| result.best_move)
    }

    /// Select the next move and report which rule chose it.
    pub fn select_move_with_stats(&self, board: &Board) -> Result<MoveResult, GameError> {
        let result = self.run_cascade(board).ok_or_else(|| {
            GameError::InvariantViolation("move requested on a board with no empty cell".into())
        })?;

        debug!(
            "engine picked {} via {:?} (score {:?})",
            result.best_move, result.rule, result.score
        );
        Ok(result)
    }

    fn run_cascade(&self, board: &Board) -> Option<MoveResult> {
        // 1. Our own winning move
        if let Some(pos) = find_immediate_win(board, self.player) {
            return Some(MoveResult::from_rule(pos, Rule::ImmediateWin));
        }

        // 2. Deny the opponent's winning move
        if let Some(pos) = find_immediate_win(board, self.player.opponent()) {
            return Some(MoveResult::from_rule(pos, Rule::Block));
        }

        // 3. Extend our partial lines
        if let Some((pos, score)) = best_scored_cell(board, self.player) {
            return Some(MoveResult::strategic(pos, score));
        }

        // 4-6. Fixed preference lists
        first_empty(board, &CENTER_CELLS)
            .map(|pos| MoveResult::from_rule(pos, Rule::Center))
            .or_else(|| {
                first_empty(board, &CORNER_CELLS).map(|pos| MoveResult::from_rule(pos, Rule::Corner))
            })
            .or_else(|| {
                board
                    .empty_cells()
                    .next()
                    .map(|pos| MoveResult::from_rule(pos, Rule::AnyCell))
            })
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Would placing `player` at `pos` win the game?
///
/// Takes the board by value; the caller's board is not modified.
#[must_use]
pub fn would_win(mut board: Board, pos: Move, player: Player) -> bool {
    board.place(pos, player);
    has_line(&board, player)
}

/// First empty cell (row-major) where `player` wins immediately.
#[must_use]
pub fn find_immediate_win(board: &Board, player: Player) -> Option<Move> {
    board.empty_cells().find(|&pos| would_win(*board, pos, player))
}

/// First empty cell of an ordered candidate list.
#[must_use]
pub fn first_empty(board: &Board, candidates: &[Move]) -> Option<Move> {
    candidates.iter().copied().find(|&pos| board.is_empty(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;
    use crate::rules::GameStatus;
    use proptest::prelude::*;

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.player(), Player::Computer);
        assert_eq!(AIEngine::default(), engine);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let engine = AIEngine::new();
        let board = Board::from_rows(["XXX.", "OO..", "O...", "...."]);
        let result = engine.select_move_with_stats(&board).unwrap();
        assert_eq!(result.best_move, Move::new(0, 3));
        assert_eq!(result.rule, Rule::ImmediateWin);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let engine = AIEngine::new();
        let board = Board::from_rows(["..O.", "X.O.", "X.O.", "...."]);
        let result = engine.select_move_with_stats(&board).unwrap();
        assert_eq!(result.best_move, Move::new(3, 2));
        assert_eq!(result.rule, Rule::Block);
    }

    #[test]
    fn test_win_beats_block() {
        let engine = AIEngine::new();
        // Both sides have three in a row; the computer should take its own win
        let board = Board::from_rows(["OOO.", "....", "XXX.", "...."]);
        let result = engine.select_move_with_stats(&board).unwrap();
        assert_eq!(result.best_move, Move::new(2, 3));
        assert_eq!(result.rule, Rule::ImmediateWin);
    }

    #[test]
    fn test_first_win_in_row_major_order() {
        let engine = AIEngine::new();
        // Winning cells at (1,3) via row 1 and (3,0) via column 0
        let board = Board::from_rows(["XO.O", "XXX.", "XOO.", "..O."]);
        assert_eq!(engine.select_move(&board).unwrap(), Move::new(1, 3));
    }

    #[test]
    fn test_diagonal_win_and_block() {
        let engine = AIEngine::new();
        let board = Board::from_rows(["X..O", ".X..", "..X.", "O..."]);
        assert_eq!(engine.select_move(&board).unwrap(), Move::new(3, 3));

        // (3,0) already taken, nothing to block
        let board = Board::from_rows(["X..O", "..O.", ".O..", "X..."]);
        assert_eq!(
            engine.select_move_with_stats(&board).unwrap().rule,
            Rule::Strategic
        );

        let board = Board::from_rows(["X..O", "..O.", ".O..", ".X.."]);
        let result = engine.select_move_with_stats(&board).unwrap();
        assert_eq!(result.best_move, Move::new(3, 0));
        assert_eq!(result.rule, Rule::Block);
    }

    #[test]
    fn test_strategic_on_empty_board() {
        let engine = AIEngine::new();
        let result = engine.select_move_with_stats(&Board::new()).unwrap();
        assert_eq!(result.best_move, Move::new(0, 0));
        assert_eq!(result.rule, Rule::Strategic);
        assert_eq!(result.score, Some(0));
    }

    #[test]
    fn test_strategic_tie_break_row_major() {
        let engine = AIEngine::new();
        // With one X at (1,1), (1,2) and (2,1) both score 2 + 3 = 5
        let board = Board::from_rows(["....", ".X..", "....", "...."]);
        let result = engine.select_move_with_stats(&board).unwrap();
        assert_eq!(result.best_move, Move::new(1, 2));
        assert_eq!(result.score, Some(5));
    }

    #[test]
    fn test_full_board_is_invariant_violation() {
        let engine = AIEngine::new();
        let board = Board::from_rows(["XXOO", "OOXX", "XXOO", "OOXX"]);
        assert!(matches!(
            engine.select_move(&board),
            Err(GameError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_would_win_leaves_board_untouched() {
        let board = Board::from_rows(["XXX.", "....", "....", "...."]);
        let before = board;
        assert!(would_win(board, Move::new(0, 3), Player::Computer));
        assert!(!would_win(board, Move::new(0, 3), Player::Human));
        assert!(!would_win(board, Move::new(1, 0), Player::Computer));
        assert_eq!(board, before);
    }

    #[test]
    fn test_preference_lists() {
        let board = Board::from_rows(["X...", ".OX.", ".O..", "...."]);
        assert_eq!(first_empty(&board, &CENTER_CELLS), Some(Move::new(2, 2)));
        assert_eq!(first_empty(&board, &CORNER_CELLS), Some(Move::new(0, 3)));

        let board = Board::from_rows(["X..O", ".OX.", "XO.X", "O..."]);
        assert_eq!(first_empty(&board, &CORNER_CELLS), Some(Move::new(3, 3)));

        let full_corners = Board::from_rows(["X..O", "....", "....", "O..X"]);
        assert_eq!(first_empty(&full_corners, &CORNER_CELLS), None);
    }

    #[test]
    fn test_engine_for_human_side() {
        // The same cascade from the human's point of view
        let engine = AIEngine::for_player(Player::Human);
        let board = Board::from_rows(["XXX.", "OOO.", "....", "...."]);
        let result = engine.select_move_with_stats(&board).unwrap();
        assert_eq!(result.best_move, Move::new(1, 3));
        assert_eq!(result.rule, Rule::ImmediateWin);
    }

    fn arb_in_progress_board() -> impl Strategy<Value = Board> {
        prop::collection::vec(0u8..3, TOTAL_CELLS)
            .prop_map(|cells| {
                let mut board = Board::new();
                for (idx, cell) in cells.into_iter().enumerate() {
                    match cell {
                        1 => board.place(Move::from_index(idx), Player::Human),
                        2 => board.place(Move::from_index(idx), Player::Computer),
                        _ => {}
                    }
                }
                board
            })
            .prop_filter("game must be in progress", |b| {
                b.status() == GameStatus::InProgress
            })
    }

    proptest! {
        #[test]
        fn prop_never_picks_occupied_cell(board in arb_in_progress_board()) {
            let engine = AIEngine::new();
            let before = board;
            let pos = engine.select_move(&board).unwrap();
            prop_assert!(board.is_empty(pos));
            prop_assert_eq!(board, before);
        }

        #[test]
        fn prop_takes_win_when_available(board in arb_in_progress_board()) {
            let engine = AIEngine::new();
            let result = engine.select_move_with_stats(&board).unwrap();
            if let Some(win) = find_immediate_win(&board, Player::Computer) {
                prop_assert_eq!(result.best_move, win);
                prop_assert_eq!(result.rule, Rule::ImmediateWin);
            } else if let Some(block) = find_immediate_win(&board, Player::Human) {
                prop_assert_eq!(result.best_move, block);
                prop_assert_eq!(result.rule, Rule::Block);
            } else {
                prop_assert_eq!(result.rule, Rule::Strategic);
            }
        }
    }
}
