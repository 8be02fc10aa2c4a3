//! Outcome invariant: the stored outcome is a pure function of the board.

use super::{Invariant, Transition};
use crate::rules::evaluate_outcome;

/// Invariant: the outcome after a transition equals a fresh evaluation of
/// the board.
pub struct OutcomeDerivedInvariant;

impl Invariant<Transition> for OutcomeDerivedInvariant {
    fn holds(transition: &Transition) -> bool {
        transition.after.outcome == evaluate_outcome(&transition.after.board)
    }

    fn description() -> &'static str {
        "Outcome is derived from the board"
    }
}
