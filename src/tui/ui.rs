//! Stateless UI rendering for the board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use noughts_and_crosses::{Mark, Position, Settings};

const CROSS: Color = Color::Rgb(0xF8, 0x44, 0x3E);
const NOUGHT: Color = Color::Rgb(0x07, 0x84, 0xEE);
const WINNER: Color = Color::Rgb(0x3B, 0xD0, 0x4C);

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App, cursor: Position, settings: &Settings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let subtitle = if *settings.mode() == noughts_and_crosses::Mode::HumanVsComputer {
        format!("{} - you play {}", settings.mode().label(), settings.human())
    } else {
        settings.mode().label().to_string()
    };
    let title = Paragraph::new(format!("Noughts and Crosses | {}", subtitle))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app, cursor);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(
        "Arrows+Enter or 1-9: move | H: hint | R: restart | M: mode | C: swap side | Q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, cursor: Position) {
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
        draw_row(frame, rows[row * 2], app, cursor, row);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(board_area.width as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, cursor: Position, row: usize) {
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
        if let Some(pos) = Position::from_index(row * 3 + col) {
            draw_cell(frame, cols[col * 2], app, cursor, pos);
        }
        if col < 2 {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, cursor: Position, pos: Position) {
    let index = pos.to_index();
    let on_winning_line = app
        .winning_line()
        .is_some_and(|(line, _)| line.contains(&index));

    let (symbol, base_style) = match app.cell(index) {
        None if app.hint() == Some(index) => ("·", Style::default().fg(Color::Green)),
        None => (" ", Style::default().fg(Color::DarkGray)),
        Some(mark) => {
            let color = match (on_winning_line, mark) {
                (true, _) => WINNER,
                (false, Mark::Cross) => CROSS,
                (false, Mark::Nought) => NOUGHT,
            };
            let symbol = if mark == Mark::Cross { "X" } else { "O" };
            (symbol, Style::default().fg(color).add_modifier(Modifier::BOLD))
        }
    };

    let style = if pos == cursor {
        base_style.bg(Color::White)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ])
    .alignment(Alignment::Center);

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
