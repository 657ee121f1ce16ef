//! Game state management for the GUI

use std::time::{Duration, Instant};

use log::warn;

use crate::error::{GameError, IllegalReason};
use crate::{Game, GameStatus, Move, Player};

/// AI response state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiState {
    Idle,
    /// The computer answers once `ready_at` has passed
    Thinking { ready_at: Instant },
}

/// Session plus everything only the GUI cares about
pub struct GameState {
    pub game: Game,
    pub ai_state: AiState,
    pub message: Option<String>,
    think_delay: Duration,
}

impl GameState {
    pub fn new(think_delay: Duration) -> Self {
        Self {
            game: Game::new(),
            ai_state: AiState::Idle,
            message: None,
            think_delay,
        }
    }

    pub fn reset(&mut self) {
        self.game.reset_game();
        self.ai_state = AiState::Idle;
        self.message = None;
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn is_game_over(&self) -> bool {
        self.game.status().is_over()
    }

    /// Whether a click on the board should be considered at all
    pub fn accepts_input(&self) -> bool {
        !self.is_game_over() && !self.is_ai_thinking() && self.game.turn() == Player::Human
    }

    /// Attempt to place the human's mark
    pub fn try_place(&mut self, pos: Move) -> Result<(), GameError> {
        if self.is_ai_thinking() {
            return Err(GameError::illegal(pos, IllegalReason::OutOfTurn));
        }

        let status = self.game.apply_human_move(pos.row as usize, pos.col as usize)?;
        self.message = None;

        if status == GameStatus::InProgress {
            self.ai_state = AiState::Thinking {
                ready_at: Instant::now() + self.think_delay,
            };
        }
        Ok(())
    }

    /// Apply the AI reply once its delay has passed
    pub fn check_ai_result(&mut self) {
        self.poll_ai_at(Instant::now());
    }

    pub fn poll_ai_at(&mut self, now: Instant) {
        let AiState::Thinking { ready_at } = self.ai_state else {
            return;
        };
        if now < ready_at {
            return;
        }

        self.ai_state = AiState::Idle;
        if let Err(err) = self.game.apply_ai_move() {
            warn!("AI move failed: {}", err);
            self.message = Some(format!("AI error: {}", err));
        }
    }

    /// Time left before the AI answers
    pub fn ai_thinking_remaining(&self) -> Option<Duration> {
        match self.ai_state {
            AiState::Thinking { ready_at } => {
                Some(ready_at.saturating_duration_since(Instant::now()))
            }
            AiState::Idle => None,
        }
    }

    /// One-line status for the side panel
    pub fn status_text(&self) -> &'static str {
        match self.game.status() {
            GameStatus::HumanWin => "You won!",
            GameStatus::ComputerWin => "AI wins!",
            GameStatus::Tie => "It's a tie!",
            GameStatus::InProgress if self.is_ai_thinking() => "AI is thinking...",
            GameStatus::InProgress => "Your turn (You are O)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(Duration::ZERO);
        assert!(state.accepts_input());
        assert!(!state.is_ai_thinking());
        assert_eq!(state.status_text(), "Your turn (You are O)");
    }

    #[test]
    fn test_human_move_schedules_ai() {
        let mut state = GameState::new(Duration::from_secs(60));
        state.try_place(Move::new(1, 1)).unwrap();
        assert!(state.is_ai_thinking());
        assert!(!state.accepts_input());
        assert_eq!(state.status_text(), "AI is thinking...");

        // Delay not elapsed yet
        state.check_ai_result();
        assert!(state.is_ai_thinking());
        assert_eq!(state.game.history().len(), 1);

        // Clicks while thinking are rejected and change nothing
        assert!(state.try_place(Move::new(0, 0)).is_err());
        assert_eq!(state.game.cell(0, 0), Cell::Empty);
    }

    #[test]
    fn test_ai_answers_after_delay() {
        let mut state = GameState::new(Duration::from_millis(100));
        state.try_place(Move::new(1, 1)).unwrap();
        state.poll_ai_at(Instant::now() + Duration::from_secs(1));

        assert!(!state.is_ai_thinking());
        assert_eq!(state.game.history().len(), 2);
        assert!(state.accepts_input());
        assert!(state.message.is_none());
    }

    #[test]
    fn test_occupied_click_is_error() {
        let mut state = GameState::new(Duration::ZERO);
        state.try_place(Move::new(0, 0)).unwrap();
        state.check_ai_result();
        let err = state.try_place(Move::new(0, 0)).unwrap_err();
        assert!(matches!(
            err,
            GameError::IllegalMove { reason: IllegalReason::Occupied, .. }
        ));
    }

    #[test]
    fn test_reset_clears_pending_ai() {
        let mut state = GameState::new(Duration::from_secs(60));
        state.try_place(Move::new(2, 2)).unwrap();
        state.reset();
        assert_eq!(state.ai_state, AiState::Idle);
        assert!(state.game.history().is_empty());
        assert_eq!(state.ai_thinking_remaining(), None);
    }
}
