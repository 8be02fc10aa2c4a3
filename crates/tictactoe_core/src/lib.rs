//! Tic-tac-toe game state, rules and change notification.
//!
//! # Architecture
//!
//! - **Game**: the state model. Owns the board and the player to move,
//!   applies moves, and derives the outcome from the board.
//! - **Rules**: pure win/draw evaluation over a board.
//! - **Observer**: callback registration so a front end can re-render when
//!   state changes.
//! - **View**: the texts and enabled cells a front end displays.
//! - **Invariants**: properties every transition must preserve.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, Outcome, Player};
//!
//! let mut game = Game::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     game.apply_move(row, col);
//! }
//! assert_eq!(game.outcome(), Outcome::Won(Player::X));
//! assert_eq!(game.turn(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod observer;
mod outcome;
mod position;
pub mod rules;
mod types;
mod view;

// Crate-level exports - Game state model
pub use game::{Game, GameSnapshot};

// Crate-level exports - Domain types
pub use action::{Move, MoveError};
pub use outcome::Outcome;
pub use position::{Position, PositionParseError};
pub use types::{Board, Cell, Player};

// Crate-level exports - Change notification
pub use observer::{GameEvent, Observers, SubscriptionId};

// Crate-level exports - Presentation
pub use view::GameView;

// Crate-level exports - Rules
pub use rules::evaluate_outcome;
