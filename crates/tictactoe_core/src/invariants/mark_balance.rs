//! Mark balance invariant: X is never behind O and never more than one ahead.

use super::{Invariant, Transition};
use crate::Player;

/// Invariant: `count(X) - count(O)` is 0 or 1, and while the game is in
/// progress X is to move exactly when the counts are equal.
pub struct MarkBalanceInvariant;

impl Invariant<Transition> for MarkBalanceInvariant {
    fn holds(transition: &Transition) -> bool {
        let after = &transition.after;
        let xs = after.board.count(Player::X);
        let os = after.board.count(Player::O);

        if xs != os && xs != os + 1 {
            return false;
        }

        if after.outcome.is_terminal() {
            return true;
        }

        let expected = if xs == os { Player::X } else { Player::O };
        after.turn == expected
    }

    fn description() -> &'static str {
        "X and O mark counts stay balanced"
    }
}
