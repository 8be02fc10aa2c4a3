//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::{Invariant, Transition};

/// Invariant: the turn flips exactly when an accepted move leaves the game
/// in progress.
///
/// - accepted, still ongoing: turn passes to the opponent
/// - accepted, game over: turn stays on the player who finished it
/// - rejected: nothing observable changes
pub struct AlternatingTurnInvariant;

impl Invariant<Transition> for AlternatingTurnInvariant {
    fn holds(transition: &Transition) -> bool {
        let Transition {
            before,
            after,
            accepted,
        } = transition;

        if !accepted {
            return before == after;
        }

        if after.outcome.is_terminal() {
            after.turn == before.turn
        } else {
            after.turn == before.turn.opponent()
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
