//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{GameView, Position};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

/// Screen areas of the nine cells from the last draw, for mouse hit-testing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardLayout {
    cells: Vec<(Position, Rect)>,
}

impl BoardLayout {
    /// Cell under the terminal coordinates `(column, row)`, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPosition::new(column, row);
        self.cells
            .iter()
            .find(|(_, area)| area.contains(point))
            .map(|(pos, _)| *pos)
    }

    /// Area drawn for `pos`.
    pub fn area_of(&self, pos: Position) -> Option<Rect> {
        self.cells
            .iter()
            .find(|(cell, _)| *cell == pos)
            .map(|(_, area)| *area)
    }
}

/// Renders title, board, banner and key help. Returns where the cells went.
pub fn draw(frame: &mut Frame, view: &GameView, cursor: Position, status: &str) -> BoardLayout {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(CELL_HEIGHT * 3 + 2), // Board
            Constraint::Length(3), // Banner
            Constraint::Length(1), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let layout = draw_board(frame, chunks[1], view, cursor);

    let banner_style = if view.show_play_again() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let banner = Paragraph::new(view.banner())
        .style(banner_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, chunks[2]);

    let status_line = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(status_line, chunks[3]);

    let help = if view.show_play_again() {
        "r: play again  q: quit"
    } else {
        "arrows/hjkl: move  enter: place  1-9: place  q: quit"
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    layout
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position) -> BoardLayout {
    let board_area = center_rect(area, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(inner);

    let mut layout = BoardLayout::default();
    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);

        for (col, cell_area) in cols.iter().enumerate() {
            if let Some(pos) = Position::from_row_col(row, col) {
                draw_cell(frame, *cell_area, view, cursor, pos);
                layout.cells.push((pos, *cell_area));
            }
        }
    }
    layout
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position, pos: Position) {
    let label = view.cell_label(pos);

    let mut style = match label {
        "X" => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        "O" => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::DarkGray),
    };
    if view.is_winning_cell(pos) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if pos == cursor && !view.show_play_again() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let symbol = if label.is_empty() {
        format!("{}", pos.to_index() + 1)
    } else {
        label.to_string()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(style);
    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
