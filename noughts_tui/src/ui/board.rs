//! Tic-tac-toe board rendering.

use noughts_core::{GameResult, Mark, Session, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

/// Renders the board, highlighting the winning line when the game is won.
pub fn render_board(f: &mut Frame, area: Rect, session: &Session) {
    let winning_line = match session.result() {
        GameResult::Won { line, .. } => Some(line),
        _ => None,
    };

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

    render_row(f, rows[0], session, winning_line, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], session, winning_line, 3);
    render_separator(f, rows[3]);
    render_row(f, rows[4], session, winning_line, 6);
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    session: &Session,
    winning_line: Option<[usize; 3]>,
    start: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(f, cols[0], session, winning_line, start);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], session, winning_line, start + 1);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], session, winning_line, start + 2);
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    session: &Session,
    winning_line: Option<[usize; 3]>,
    pos: usize,
) {
    let square = session.board().get(pos).unwrap_or(Square::Empty);
    let (text, style) = match square {
        Square::Empty if session.is_cell_playable(pos) => (
            format!("{}", pos + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (" ".to_string(), Style::default()),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if winning_line.is_some_and(|line| line.contains(&pos)) {
        style.bg(Color::Green).fg(Color::Black)
    } else {
        style
    };

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
