//! Application state and logic.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tictactoe_core::{Game, GameEvent, GameView, Outcome, Position};
use tracing::{debug, info};

use super::input::{Action, move_cursor};
use super::ui::BoardLayout;

/// Main application state.
///
/// The app never decides what the board looks like: it forwards input to
/// the [`Game`] and redraws whenever the game reports a change.
pub struct App {
    game: Game,
    cursor: Position,
    layout: BoardLayout,
    dirty: Rc<Cell<bool>>,
    status: Rc<RefCell<String>>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        let mut game = Game::new();
        let dirty = Rc::new(Cell::new(true));
        let status = Rc::new(RefCell::new(String::new()));

        let dirty_flag = Rc::clone(&dirty);
        let status_line = Rc::clone(&status);
        game.subscribe(move |event| {
            dirty_flag.set(true);
            match event {
                GameEvent::MoveAccepted(action) => {
                    *status_line.borrow_mut() = format!("{} played {}", action.player, action.position);
                }
                GameEvent::OutcomeChanged(Outcome::Ongoing) if !status_line.borrow().is_empty() => {
                    *status_line.borrow_mut() = "New game".to_string();
                }
                _ => {}
            }
        });

        Self {
            game,
            cursor: Position::Center,
            layout: BoardLayout::default(),
            dirty,
            status,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Presentation model for the next frame.
    pub fn view(&self) -> GameView {
        GameView::from(&self.game)
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Last move / reset message.
    pub fn status(&self) -> String {
        self.status.borrow().clone()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns and clears the redraw flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Forces a redraw, e.g. after a terminal resize.
    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Remembers where the cells were drawn.
    pub fn set_layout(&mut self, layout: BoardLayout) {
        self.layout = layout;
    }

    /// Handles a left click at terminal coordinates.
    pub fn click(&mut self, column: u16, row: u16) {
        if let Some(pos) = self.layout.cell_at(column, row) {
            self.handle(Action::PlaceAt(pos));
        }
    }

    /// Applies a user action.
    pub fn handle(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::MoveCursor(direction) => {
                let cursor = move_cursor(self.cursor, direction);
                if cursor != self.cursor {
                    self.cursor = cursor;
                    self.mark_dirty();
                }
            }
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::PlaceAt(pos) => {
                self.cursor = pos;
                self.mark_dirty();
                self.place(pos);
            }
            Action::PlayAgain => {
                // Offered only once the game is over
                if self.view().show_play_again() {
                    self.game.reset();
                    self.cursor = Position::Center;
                }
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn place(&mut self, pos: Position) {
        self.game.apply_move(pos.row(), pos.col());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::Direction;
    use tictactoe_core::{Cell as BoardCell, Player};

    #[test]
    fn test_place_at_cursor() {
        let mut app = App::new();
        app.take_dirty();
        app.handle(Action::PlaceAtCursor);
        assert_eq!(
            app.game().board().get(Position::Center),
            BoardCell::Occupied(Player::X)
        );
        assert!(app.take_dirty());
        assert_eq!(app.status(), "X played Center");
    }

    #[test]
    fn test_occupied_cell_does_not_redraw_board() {
        let mut app = App::new();
        app.handle(Action::PlaceAtCursor);
        app.take_dirty();
        app.handle(Action::PlaceAtCursor);
        assert!(!app.take_dirty());
        assert_eq!(app.game().turn(), Player::O);
    }

    #[test]
    fn test_play_again_only_after_game_over() {
        let mut app = App::new();
        app.handle(Action::PlaceAt(Position::TopLeft));
        app.handle(Action::PlayAgain);
        assert!(!app.game().board().is_empty(Position::TopLeft));

        for pos in [Position::Center, Position::TopCenter, Position::MiddleLeft, Position::TopRight] {
            app.handle(Action::PlaceAt(pos));
        }
        assert_eq!(app.game().outcome(), Outcome::Won(Player::X));

        app.handle(Action::PlayAgain);
        assert_eq!(app.game().snapshot(), Game::new().snapshot());
        assert_eq!(app.status(), "New game");
    }

    #[test]
    fn test_cursor_movement_marks_dirty() {
        let mut app = App::new();
        app.take_dirty();
        app.handle(Action::MoveCursor(Direction::Up));
        assert_eq!(app.cursor(), Position::TopCenter);
        assert!(app.take_dirty());
        app.handle(Action::MoveCursor(Direction::Up));
        assert!(!app.take_dirty());
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        app.handle(Action::Quit);
        assert!(app.should_quit());
    }
}
