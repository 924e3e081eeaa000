//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::games::tictactoe::{Cell, Marker, Position};

use super::app::{App, NameField, Screen};

const BOARD_HELP: &str = "Arrows move | Enter/Space or 1-9 play | r restart | n new players | q quit";
const NAME_HELP: &str = "Tab switch field | Enter start | Esc quit";

/// Renders the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Body
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let (status, help) = match app.screen() {
        Screen::NameEntry => {
            draw_name_entry(frame, chunks[1], app);
            ("Enter player names".to_string(), NAME_HELP)
        }
        Screen::Board => {
            draw_board(frame, chunks[1], &app.controller().cells(), *app.cursor());
            (app.status_text(), BOARD_HELP)
        }
    };

    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_name_entry(frame: &mut Frame, area: Rect, app: &App) {
    let form = center_rect(area, 40, 6);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(form);

    for (slot, (field, label)) in [
        (NameField::Player1, "Player 1 (X)"),
        (NameField::Player2, "Player 2 (O)"),
    ]
    .into_iter()
    .enumerate()
    {
        let focused = *app.focus() == field;
        let border_style = if focused {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut text = app.names()[slot].clone();
        if focused {
            text.push('_');
        }
        let input = Paragraph::new(text).block(
            Block::default()
                .title(label)
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(input, rows[slot]);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, cells: &[Cell; 9], cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], cells, cursor, row);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(38)).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, cells: &[Cell; 9], cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], cells[pos.to_index()], pos == cursor);
        }
        if col < 2 {
            let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, selected: bool) {
    let (symbol, base_style) = match cell {
        Cell::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Cell::Marked(Marker::X) => (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Cell::Marked(Marker::O) => (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let style = if selected {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
