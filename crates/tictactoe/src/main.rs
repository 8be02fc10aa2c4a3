//! Tic-tac-toe - Unified CLI
//!
//! Two players, one terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::cli::{Cli, Command};
use tictactoe::{AppConfig, logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command.unwrap_or_default() {
        Command::Play { log_file, no_mouse } => run_play(config, log_file, no_mouse),
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
    }
}

/// Run the interactive terminal UI
fn run_play(config: AppConfig, log_file: Option<std::path::PathBuf>, no_mouse: bool) -> Result<()> {
    let mut config = config;
    if let Some(path) = log_file {
        config = config.with_log_file(path);
    }
    if no_mouse {
        config = config.with_mouse(false);
    }
    tui::run_tui(&config)
}

/// Run headless replay, printing to stdout
fn run_replay(config: &AppConfig, moves: &[String], json: bool) -> Result<()> {
    logging::init_stderr_tracing(config.log_filter());
    info!("Starting replay");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    replay::run_replay(moves, json, &mut out)
}
