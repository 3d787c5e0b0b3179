//! Stateless UI rendering for the ultimate tic-tac-toe board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use uttt_core::{GameState, Move, Player, Position, Square, SubBoard};

use super::app::App;
use super::input::{BOARD_HEIGHT, BOARD_WIDTH};

const TOP_BORDER: &str = "┌───────┬───────┬───────┐";
const MIDDLE_BORDER: &str = "├───────┼───────┼───────┤";
const BOTTOM_BORDER: &str = "└───────┴───────┴───────┘";

/// Splits the frame into title, board and status areas.
fn layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(BOARD_HEIGHT),
        Constraint::Length(4),
    ])
    .areas(area)
}

/// Where the board lands inside a frame of the given size.
pub fn board_rect(area: Rect) -> Rect {
    let [_, board, _] = layout(area);
    center_rect(board, BOARD_WIDTH, BOARD_HEIGHT)
}

/// Renders the game.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let [title_area, _, status_area] = layout(area);

    let title = Paragraph::new(vec![
        Line::from("Ultimate Tic-Tac-Toe"),
        Line::from(Span::styled(
            "arrows move, Enter/Space or click to play, r restart, q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let board = Paragraph::new(board_lines(app.state(), app.is_over(), app.cursor(), app.last_move()));
    frame.render_widget(board, board_rect(area));

    let status = Paragraph::new(vec![
        Line::from(app.status_line()),
        Line::from(app.status_message().to_string()),
    ])
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

fn border_line(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn board_lines(
    state: &GameState,
    over: bool,
    cursor: Move,
    last_move: Option<Move>,
) -> Vec<Line<'static>> {
    let mut lines = vec![border_line(TOP_BORDER)];
    for board_row in 0..3u8 {
        for cell_row in 0..3u8 {
            lines.push(row_line(state, over, board_row, cell_row, cursor, last_move));
        }
        lines.push(border_line(if board_row < 2 {
            MIDDLE_BORDER
        } else {
            BOTTOM_BORDER
        }));
    }
    lines
}

fn row_line(
    state: &GameState,
    over: bool,
    board_row: u8,
    cell_row: u8,
    cursor: Move,
    last_move: Option<Move>,
) -> Line<'static> {
    let separator = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::with_capacity(20);

    for board_col in 0..3u8 {
        spans.push(Span::styled("│ ", separator));
        let Some(board) = Position::from_col_row(board_col, board_row) else {
            continue;
        };
        for cell_col in 0..3u8 {
            let Some(cell) = Position::from_col_row(cell_col, cell_row) else {
                continue;
            };
            let mov = Move::new(board, cell);
            let symbol = state.board().sub_board(board).get(cell).symbol();
            spans.push(Span::styled(
                symbol.to_string(),
                cell_style(state, over, mov, cursor, last_move),
            ));
            spans.push(Span::styled(" ", board_style(state, over, board)));
        }
    }
    spans.push(Span::styled("│", separator));
    Line::from(spans)
}

/// Background for a whole sub-board: the active target is highlighted.
fn board_style(state: &GameState, over: bool, board: Position) -> Style {
    if !over && state.board().active_target() == Some(board) {
        Style::default().bg(Color::Rgb(40, 40, 70))
    } else {
        Style::default()
    }
}

fn cell_style(
    state: &GameState,
    over: bool,
    mov: Move,
    cursor: Move,
    last_move: Option<Move>,
) -> Style {
    let sub = state.board().sub_board(mov.board);
    let mut style = board_style(state, over, mov.board);

    style = match (closed_style(sub), sub.get(mov.cell)) {
        (Some(closed), _) => style.patch(closed),
        (None, Square::Occupied(player)) => {
            style.fg(player_color(player)).add_modifier(Modifier::BOLD)
        }
        (None, Square::Empty) => style.fg(Color::DarkGray),
    };
    if last_move == Some(mov) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if mov == cursor && !over {
        style = style.bg(Color::White).fg(Color::Black);
    }
    style
}

/// Colors a won sub-board by its winner and grays out a drawn one.
fn closed_style(sub: &SubBoard) -> Option<Style> {
    match sub.winner() {
        Some(winner) => Some(
            Style::default()
                .fg(player_color(winner))
                .add_modifier(Modifier::DIM),
        ),
        None if sub.is_full() => Some(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)),
        None => None,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [_, vert, _] = Layout::vertical([
        Constraint::Length((area.height.saturating_sub(height)) / 2),
        Constraint::Length(height),
        Constraint::Length((area.height.saturating_sub(height)) / 2),
    ])
    .areas(area);

    let [_, rect, _] = Layout::horizontal([
        Constraint::Length((area.width.saturating_sub(width)) / 2),
        Constraint::Length(width),
        Constraint::Length((area.width.saturating_sub(width)) / 2),
    ])
    .areas(vert);
    rect
}
