//! Presentation model: what a front end shows for a given game state.
//!
//! Front ends render a [`GameView`] instead of interpreting the game
//! themselves, so every front end shows the same texts and enables the same
//! cells.

use super::game::{Game, GameSnapshot};
use super::outcome::Outcome;
use super::position::Position;
use super::rules;
use super::types::{Cell, Player};

/// Display-ready projection of a game snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    snapshot: GameSnapshot,
    winning_line: Option<[Position; 3]>,
}

impl GameView {
    /// Builds a view from a snapshot.
    pub fn new(snapshot: GameSnapshot) -> Self {
        let winning_line = rules::winning_line(&snapshot.board);
        Self {
            snapshot,
            winning_line,
        }
    }

    /// Text shown in a cell: `"X"`, `"O"` or empty.
    pub fn cell_label(&self, pos: Position) -> &'static str {
        match self.snapshot.board.get(pos) {
            Cell::Empty => "",
            Cell::Occupied(Player::X) => "X",
            Cell::Occupied(Player::O) => "O",
        }
    }

    /// Occupied cells are disabled for a second click.
    pub fn is_enabled(&self, pos: Position) -> bool {
        self.snapshot.board.is_empty(pos)
    }

    /// Winner / draw / whose-turn banner.
    pub fn banner(&self) -> String {
        match self.snapshot.outcome {
            Outcome::Won(player) => format!("Player {player} Wins!"),
            Outcome::Draw => "It's a Draw!".to_string(),
            Outcome::Ongoing => format!("{}'s Turn", self.snapshot.turn),
        }
    }

    /// The play-again control is only offered once the game is over.
    pub fn show_play_again(&self) -> bool {
        self.snapshot.outcome.is_terminal()
    }

    /// Completed line to highlight, if someone has won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winning_line
    }

    /// True if `pos` is part of the winning line.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.winning_line
            .is_some_and(|line| line.contains(&pos))
    }

    /// Outcome being shown.
    pub fn outcome(&self) -> Outcome {
        self.snapshot.outcome
    }

    /// Underlying snapshot.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self::new(game.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_view() {
        let view = GameView::from(&Game::new());
        assert_eq!(view.banner(), "X's Turn");
        assert!(!view.show_play_again());
        assert!(Position::ALL.iter().all(|pos| view.is_enabled(*pos)));
        assert!(Position::ALL.iter().all(|pos| view.cell_label(*pos).is_empty()));
    }

    #[test]
    fn test_view_after_move() {
        let mut game = Game::new();
        game.apply_move(1, 1);
        let view = GameView::from(&game);
        assert_eq!(view.cell_label(Position::Center), "X");
        assert!(!view.is_enabled(Position::Center));
        assert_eq!(view.banner(), "O's Turn");
    }

    #[test]
    fn test_win_banner_and_line() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
            game.apply_move(row, col);
        }
        let view = GameView::from(&game);
        assert_eq!(view.banner(), "Player X Wins!");
        assert!(view.show_play_again());
        assert_eq!(
            view.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert!(view.is_winning_cell(Position::TopCenter));
        assert!(!view.is_winning_cell(Position::Center));
    }

    #[test]
    fn test_draw_banner() {
        let mut game = Game::new();
        for (row, col) in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ] {
            game.apply_move(row, col);
        }
        let view = GameView::from(&game);
        assert_eq!(view.banner(), "It's a Draw!");
        assert!(view.show_play_again());
        assert_eq!(view.winning_line(), None);
    }
}
