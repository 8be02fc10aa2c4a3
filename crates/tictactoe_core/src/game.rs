//! The game state model.
//!
//! [`Game`] owns the board and the player to move, derives the outcome from
//! the board after every change, and notifies observers. It is mutated only
//! through [`Game::apply_move`] (or its fallible twin
//! [`Game::try_apply_move`]) and [`Game::reset`].

use super::action::{Move, MoveError};
#[cfg(debug_assertions)]
use super::invariants::{InvariantSet, TicTacToeInvariants, Transition};
use super::observer::{GameEvent, Observers, SubscriptionId};
use super::outcome::Outcome;
use super::position::Position;
use super::rules;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Copy of everything a presentation layer can observe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The board.
    pub board: Board,
    /// Player to move (the last mover once the game has ended).
    pub turn: Player,
    /// Outcome derived from the board.
    pub outcome: Outcome,
}

/// Tic-tac-toe game engine.
#[derive(Debug, Default)]
pub struct Game {
    board: Board,
    turn: Player,
    outcome: Outcome,
    observers: Observers,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next accepted move places.
    ///
    /// Once the game has ended this stays on the player who made the last
    /// move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Recomputes the outcome from the board.
    ///
    /// Always equal to [`Game::outcome`]; exposed for callers that want the
    /// rule evaluation spelled out.
    pub fn evaluate_outcome(&self) -> Outcome {
        rules::evaluate_outcome(&self.board)
    }

    /// Copies the observable state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            turn: self.turn,
            outcome: self.outcome,
        }
    }

    /// True if a move at `pos` would be accepted right now.
    pub fn is_playable(&self, pos: Position) -> bool {
        !self.outcome.is_terminal() && self.board.is_empty(pos)
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Illegal moves (off the board, occupied cell, finished game) are
    /// ignored: state is unchanged and no observer is notified.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, row: usize, col: usize) {
        let result = Position::from_row_col(row, col)
            .ok_or(MoveError::OutOfBounds { row, col })
            .and_then(|pos| self.try_apply_move(pos));

        if let Err(e) = result {
            debug!(error = %e, "Ignoring illegal move");
        }
    }

    /// Places the current player's mark at `pos`, reporting why it failed.
    ///
    /// On success returns the new outcome. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the outcome is already terminal.
    /// - [`MoveError::SquareOccupied`] if the cell holds a mark.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn try_apply_move(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver(self.outcome));
        }

        #[cfg(debug_assertions)]
        let before = self.snapshot();

        let action = Move::new(self.turn, pos);
        self.board.place(pos, action.player)?;

        let previous_outcome = self.outcome;
        self.outcome = rules::evaluate_outcome(&self.board);
        if !self.outcome.is_terminal() {
            self.turn = self.turn.opponent();
        }

        #[cfg(debug_assertions)]
        self.check_transition(before);

        debug!(%action, outcome = %self.outcome, "Move applied");
        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, "Game over");
        }

        self.observers.notify(&GameEvent::MoveAccepted(action));
        self.observers
            .notify(&GameEvent::BoardChanged(self.board.clone()));
        if self.outcome != previous_outcome {
            self.observers
                .notify(&GameEvent::OutcomeChanged(self.outcome));
        }
        if self.turn != action.player {
            self.observers.notify(&GameEvent::TurnChanged(self.turn));
        }

        Ok(self.outcome)
    }

    /// Restores the canonical initial state and notifies observers.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Player::X;
        self.outcome = rules::evaluate_outcome(&self.board);
        info!("Game reset");

        self.observers
            .notify(&GameEvent::BoardChanged(self.board.clone()));
        self.observers
            .notify(&GameEvent::OutcomeChanged(self.outcome));
        self.observers.notify(&GameEvent::TurnChanged(self.turn));
    }

    /// Registers `callback` for state changes.
    ///
    /// The callback first receives the current board, outcome and turn, then
    /// every later change until [`Game::unsubscribe`] is called.
    #[instrument(skip(self, callback))]
    pub fn subscribe(&mut self, callback: impl FnMut(&GameEvent) + 'static) -> SubscriptionId {
        let id = self.observers.subscribe(callback);
        let current = [
            GameEvent::BoardChanged(self.board.clone()),
            GameEvent::OutcomeChanged(self.outcome),
            GameEvent::TurnChanged(self.turn),
        ];
        for event in &current {
            self.observers.notify_one(id, event);
        }
        id
    }

    /// Removes a subscription. Returns `false` if it was not registered.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    #[cfg(debug_assertions)]
    fn check_transition(&self, before: GameSnapshot) {
        let transition = Transition {
            before,
            after: self.snapshot(),
            accepted: true,
        };
        if let Err(violations) = TicTacToeInvariants::check_all(&transition) {
            for violation in &violations {
                tracing::error!(invariant = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "game invariants violated: {violations:?}");
        }
    }
}
