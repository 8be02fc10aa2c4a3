//! Monotonic board invariant: cells never change once set.

use super::{Invariant, Transition};
use crate::Cell;

/// Invariant: Board cells are monotonic (never overwritten or cleared).
///
/// Every occupied cell before the transition holds the same mark after it.
pub struct MonotonicBoardInvariant;

impl Invariant<Transition> for MonotonicBoardInvariant {
    fn holds(transition: &Transition) -> bool {
        transition
            .before
            .board
            .cells()
            .iter()
            .zip(transition.after.board.cells())
            .all(|(before, after)| *before == Cell::Empty || before == after)
    }

    fn description() -> &'static str {
        "Occupied cells never change"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameSnapshot, Player, Position};

    fn snapshot(marks: &[(Position, Player)]) -> GameSnapshot {
        let mut board = Board::new();
        for (pos, player) in marks {
            board.place(*pos, *player).unwrap();
        }
        GameSnapshot {
            board,
            ..GameSnapshot::default()
        }
    }

    #[test]
    fn test_adding_a_mark_holds() {
        let transition = Transition {
            before: snapshot(&[(Position::Center, Player::X)]),
            after: snapshot(&[(Position::Center, Player::X), (Position::TopLeft, Player::O)]),
            accepted: true,
        };
        assert!(MonotonicBoardInvariant::holds(&transition));
    }

    #[test]
    fn test_clearing_a_mark_violates() {
        let transition = Transition {
            before: snapshot(&[(Position::Center, Player::X)]),
            after: snapshot(&[]),
            accepted: true,
        };
        assert!(!MonotonicBoardInvariant::holds(&transition));
    }
}
