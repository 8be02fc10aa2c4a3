//! Headless play: apply a list of moves and print the result.

use derive_more::{Display, Error};
use std::io::Write;
use tictactoe_core::{Game, GameView, Position, PositionParseError};
use tracing::{debug, info, instrument};

/// A move token that is neither `row,col` nor a cell label.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Move #{index}: {source}")]
pub struct ReplayError {
    /// 1-based position of the token on the command line.
    pub index: usize,
    /// Why it did not parse.
    pub source: PositionParseError,
}

/// Parses one token into raw grid coordinates.
///
/// Numeric pairs are passed through unchecked so that off-board coordinates
/// reach the game (which ignores them) exactly as a stray click would.
pub fn parse_move(token: &str) -> Result<(usize, usize), PositionParseError> {
    if let Some((row, col)) = token.split_once(',')
        && let (Ok(row), Ok(col)) = (row.trim().parse::<usize>(), col.trim().parse::<usize>())
    {
        return Ok((row, col));
    }

    let pos: Position = token.parse()?;
    Ok((pos.row(), pos.col()))
}

/// Parses every token, reporting the first bad one.
pub fn parse_moves(tokens: &[String]) -> Result<Vec<(usize, usize)>, ReplayError> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            parse_move(token).map_err(|source| ReplayError {
                index: i + 1,
                source,
            })
        })
        .collect()
}

/// Plays `moves` on a fresh game, ignoring illegal ones like the UI does.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn play_moves(moves: &[(usize, usize)]) -> Game {
    let mut game = Game::new();
    for &(row, col) in moves {
        game.apply_move(row, col);
    }
    debug!(outcome = %game.outcome(), "Replay finished");
    game
}

/// Board followed by the banner, as plain text.
pub fn render_text(game: &Game) -> String {
    let view = GameView::from(game);
    format!("{}\n\n{}\n", game.board(), view.banner())
}

/// Runs the `replay` command, writing to `out`.
#[instrument(skip(tokens, out))]
pub fn run_replay(tokens: &[String], json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let moves = parse_moves(tokens)?;
    info!(count = moves.len(), "Replaying moves");

    let game = play_moves(&moves);
    if json {
        serde_json::to_writer_pretty(&mut *out, &game.snapshot())?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render_text(&game))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_and_label() {
        assert_eq!(parse_move("1,2"), Ok((1, 2)));
        assert_eq!(parse_move("bottom-left"), Ok((2, 0)));
    }

    #[test]
    fn test_off_board_pair_passes_through() {
        assert_eq!(parse_move("4,4"), Ok((4, 4)));
    }

    #[test]
    fn test_bad_token_reports_index() {
        let tokens = vec!["0,0".to_string(), "nowhere".to_string()];
        let err = parse_moves(&tokens).unwrap_err();
        assert_eq!(err.index, 2);
    }
}
