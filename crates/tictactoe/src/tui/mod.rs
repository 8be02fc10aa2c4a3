//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, Direction, action_for_key, move_cursor};
pub use ui::{BoardLayout, draw};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

use crate::config::AppConfig;
use crate::logging;

/// Run the TUI until the user quits.
pub fn run_tui(config: &AppConfig) -> Result<()> {
    // Logs go to a file so they never interfere with the TUI
    logging::init_file_tracing(config.log_file(), config.log_filter())?;

    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if *config.mouse() {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, config);

    disable_raw_mode()?;
    if *config.mouse() {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");

    res
}

/// Event loop: redraw when dirty, then wait up to one tick for input.
#[instrument(skip_all, fields(tick_ms = config.tick_rate().as_millis() as u64))]
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, config: &AppConfig) -> Result<()> {
    let mut app = App::new();

    while !app.should_quit() {
        if app.take_dirty() {
            let view = app.view();
            let cursor = app.cursor();
            let status = app.status();
            let mut layout = BoardLayout::default();
            terminal.draw(|frame| layout = draw(frame, &view, cursor, &status))?;
            app.set_layout(layout);
        }

        if !event::poll(config.tick_rate())? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if let Some(action) = action_for_key(key) {
                    app.handle(action);
                }
            }
            Event::Mouse(mouse) if *config.mouse() => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    app.click(mouse.column, mouse.row);
                }
            }
            Event::Resize(_, _) => app.mark_dirty(),
            _ => {}
        }
    }

    Ok(())
}
