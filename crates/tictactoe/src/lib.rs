//! Terminal front end for two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **TUI**: full-screen board driven by keyboard and mouse, re-rendered
//!   from the game's change notifications.
//! - **Replay**: headless play of a move list, printed as text or JSON.
//! - **Config**: TOML settings with CLI overrides.
//!
//! Game rules and state live in [`tictactoe_core`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Headless play
pub use replay::{ReplayError, parse_moves, play_moves, render_text, run_replay};
