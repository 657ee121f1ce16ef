//! Game session: one board, one human, one engine
//!
//! The session is the only owner of the board. It enforces turn order
//! (the human always opens) and reports the status after every move.

use log::{debug, info};

use crate::board::{Board, Cell, Move, Player};
use crate::engine::{AIEngine, MoveResult};
use crate::error::{GameError, IllegalReason};
use crate::rules::GameStatus;

/// A single game against the computer.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    engine: AIEngine,
    turn: Player,
    history: Vec<(Move, Player)>,
    last_ai_result: Option<MoveResult>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            engine: AIEngine::new(),
            turn: Player::Human,
            history: Vec::with_capacity(crate::board::TOTAL_CELLS),
            last_ai_result: None,
        }
    }

    /// Validate and apply the human's move, returning the resulting status.
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<GameStatus, GameError> {
        let pos = Move::try_new(row, col).ok_or(GameError::IllegalMove {
            row,
            col,
            reason: IllegalReason::OutOfBounds,
        })?;
        self.apply(pos, Player::Human)
    }

    /// Let the engine pick and apply the computer's reply.
    pub fn apply_ai_move(&mut self) -> Result<(Move, GameStatus), GameError> {
        if let Some(reason) = self.reject_reason(Player::Computer) {
            // No target cell yet: report where the last mark went
            let at = self.last_move().unwrap_or(Move::new(0, 0));
            return Err(GameError::illegal(at, reason));
        }
        let result = self.engine.select_move_with_stats(&self.board)?;
        let status = self.apply(result.best_move, Player::Computer)?;
        self.last_ai_result = Some(result);
        Ok((result.best_move, status))
    }

    fn reject_reason(&self, player: Player) -> Option<IllegalReason> {
        if self.board.status().is_over() {
            Some(IllegalReason::GameOver)
        } else if player != self.turn {
            Some(IllegalReason::OutOfTurn)
        } else {
            None
        }
    }

    fn apply(&mut self, pos: Move, player: Player) -> Result<GameStatus, GameError> {
        if let Some(reason) = self.reject_reason(player) {
            return Err(GameError::illegal(pos, reason));
        }

        self.board.apply(pos, player)?;
        self.history.push((pos, player));
        debug!("{:?} played {}", player, pos);

        let status = self.board.status();
        if status.is_over() {
            info!("game over after {} moves: {:?}", self.history.len(), status);
        } else {
            self.turn = player.opponent();
        }
        Ok(status)
    }

    /// Start over with an empty board and the human to move.
    pub fn reset_game(&mut self) {
        self.board.reset();
        self.turn = Player::Human;
        self.history.clear();
        self.last_ai_result = None;
        info!("new game");
    }

    /// Cell contents, `Empty` for coordinates off the board
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        Move::try_new(row, col).map_or(Cell::Empty, |pos| self.board.get(pos))
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move. Meaningless once the game is over.
    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn history(&self) -> &[(Move, Player)] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|&(pos, _)| pos)
    }

    #[inline]
    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
