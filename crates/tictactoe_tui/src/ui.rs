//! Tic-tac-toe screen rendering.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{Board, Player, Position, Square};

const HELP: &str = "1-9 or arrows+Enter: move   m: mode   r: restart   q: quit";

/// Draws the whole screen.
pub fn draw(f: &mut Frame, app: &App) {
    let outer = Block::default()
        .title(format!("Tic-Tac-Toe ({})", app.mode().name()))
        .borders(Borders::ALL);
    let inner = outer.inner(f.area());
    f.render_widget(outer, f.area());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(11),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let view = app.view();
    let turn = Paragraph::new(format!("Turn: {}", view.turn()))
        .style(player_style(*view.turn()))
        .alignment(Alignment::Center);
    f.render_widget(turn, rows[0]);

    render_board(f, rows[1], view.board(), app.cursor());

    let status = Paragraph::new(view.status().as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(status, rows[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, rows[3]);
}

fn render_board(f: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let board_area = center_rect(area, 31, 11);
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

    for (row, start) in [(0, 0), (2, 3), (4, 6)] {
        render_row(f, rows[row], board, start, cursor);
    }
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);
}

fn render_row(f: &mut Frame, area: Rect, board: &Board, start: usize, cursor: Position) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(2),
            Constraint::Length(9),
            Constraint::Length(2),
            Constraint::Length(9),
        ])
        .split(area);

    for (col, offset) in [(0, 0), (2, 1), (4, 2)] {
        render_square(f, cols[col], board, start + offset, cursor);
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_square(f: &mut Frame, area: Rect, board: &Board, pos: usize, cursor: Position) {
    let square = board.get(pos).unwrap_or_default();
    let (text, mut style) = match square {
        Square::Empty => (
            format!("\n{}", pos + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            format!("\n{}", player),
            player_style(player).add_modifier(Modifier::BOLD),
        ),
    };
    if cursor.to_index() == pos {
        style = style.add_modifier(Modifier::REVERSED);
    }
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn player_style(player: Player) -> Style {
    match player {
        Player::X => Style::default().fg(Color::Blue),
        Player::O => Style::default().fg(Color::Red),
    }
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
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
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}
