//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the full-screen terminal UI
    Play {
        /// Write logs to this file instead of the configured one
        #[arg(long)]
        log_file: Option<PathBuf>,

        /// Disable mouse input
        #[arg(long)]
        no_mouse: bool,
    },

    /// Apply moves without a UI and print the resulting game
    Replay {
        /// Moves in play order, as `row,col` (0-2) or a cell label like `center`
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            log_file: None,
            no_mouse: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["tictactoe"]).expect("parse");
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from(["tictactoe", "replay", "0,0", "center", "--json"])
            .expect("parse");
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec!["0,0".to_string(), "center".to_string()],
                json: true,
            })
        );
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["tictactoe", "replay"]).is_err());
    }

    #[test]
    fn test_play_overrides() {
        let cli = Cli::try_parse_from(["tictactoe", "play", "--no-mouse", "--log-file", "x.log"])
            .expect("parse");
        assert_eq!(
            cli.command,
            Some(Command::Play {
                log_file: Some(PathBuf::from("x.log")),
                no_mouse: true,
            })
        );
    }
}
