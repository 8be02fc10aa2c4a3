//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold across every state
//! transition. The game checks them after each accepted move in debug
//! builds, and the test suite checks them over arbitrary move sequences.

pub mod alternating_turn;
pub mod mark_balance;
pub mod monotonic_board;
pub mod outcome_derived;

pub use alternating_turn::AlternatingTurnInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use outcome_derived::OutcomeDerivedInvariant;

use super::game::GameSnapshot;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        check::<S, I4>(state, &mut violations);
        finish(violations)
    }
}

/// One step of the state model: the observable state before and after a
/// call to `apply_move`, and whether the move was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State before the call.
    pub before: GameSnapshot,
    /// State after the call.
    pub after: GameSnapshot,
    /// Whether the move was applied.
    pub accepted: bool,
}

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    MarkBalanceInvariant,
    OutcomeDerivedInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Game, Outcome, Player, Position};

    fn step(game: &mut Game, pos: Position) -> Transition {
        let before = game.snapshot();
        let accepted = game.try_apply_move(pos).is_ok();
        Transition {
            before,
            after: game.snapshot(),
            accepted,
        }
    }

    #[test]
    fn test_invariant_set_holds_for_opening_move() {
        let mut game = Game::new();
        let transition = step(&mut game, Position::Center);
        assert!(TicTacToeInvariants::check_all(&transition).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_for_rejected_move() {
        let mut game = Game::new();
        step(&mut game, Position::Center);
        let transition = step(&mut game, Position::Center);
        assert!(!transition.accepted);
        assert!(TicTacToeInvariants::check_all(&transition).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut before_board = Board::new();
        before_board.place(Position::TopLeft, Player::X).unwrap();
        let mut after_board = Board::new();
        after_board.place(Position::TopLeft, Player::O).unwrap();

        let transition = Transition {
            before: GameSnapshot {
                board: before_board,
                turn: Player::O,
                outcome: Outcome::Ongoing,
            },
            after: GameSnapshot {
                board: after_board,
                turn: Player::O,
                outcome: Outcome::Ongoing,
            },
            accepted: true,
        };

        let violations = TicTacToeInvariants::check_all(&transition).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| v.description == MonotonicBoardInvariant::description()));
        assert!(violations
            .iter()
            .any(|v| v.description == MarkBalanceInvariant::description()));
    }

    #[test]
    fn test_two_invariants_as_set() {
        let mut game = Game::new();
        let transition = step(&mut game, Position::TopLeft);
        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&transition).is_ok());
    }
}
