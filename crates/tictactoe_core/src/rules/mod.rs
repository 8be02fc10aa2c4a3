//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! the state model so the outcome can be recomputed from any board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Classifies a board as won, drawn or still in play.
///
/// A completed line wins even on a full board. X is checked before O, so a
/// board where both players hold a line (unreachable in play) reports X.
#[instrument(skip(board), ret(level = "trace"))]
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
