//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};
use tictoe_core::{CELLS_PER_AXIS, Cell, Grid, Player, Position};
use tracing::instrument;

use crate::presenter::{Presenter, turn_label};

const HELP: &str = "click / 1-9: play   arrows + enter: play   r: restart   q: quit";

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// The board canvas.
    pub board: Rect,
    /// Turn indicator line.
    pub turn: Rect,
    /// Key help line.
    pub help: Rect,
}

fn split_frame(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(0),    // Board
            Constraint::Length(2), // Turn
            Constraint::Length(1), // Help
        ])
        .split(area)
}

/// Space left for the board once title, turn and help lines are placed.
pub fn board_region(area: Rect) -> Rect {
    split_frame(area)[1]
}

/// Splits the frame: title on top, board centered, turn and help below.
pub fn layout(area: Rect, board_width: u16, board_height: u16) -> ScreenLayout {
    let chunks = split_frame(area);

    ScreenLayout {
        title: chunks[0],
        board: center_rect(chunks[1], board_width, board_height),
        turn: chunks[2],
        help: chunks[3],
    }
}

/// Renders the whole screen from presenter state.
#[instrument(skip_all)]
pub fn draw(frame: &mut Frame, presenter: &Presenter) {
    if !presenter.board_fits() {
        draw_too_small(frame);
        return;
    }

    let screen = layout(
        frame.area(),
        presenter.board_width(),
        presenter.board_height(),
    );

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, screen.title);

    draw_grid(
        frame,
        *presenter.canvas(),
        presenter.game().latest(),
        *presenter.cursor(),
        (*presenter.cell_width(), *presenter.cell_height()),
    );

    let turn = Paragraph::new(turn_label(presenter.game().current_player()))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(turn, screen.turn);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, screen.help);

    if let Some(notification) = presenter.notification() {
        draw_notification(frame, *presenter.canvas(), &notification.to_string());
    }
}

/// Draws the 3x3 grid of equal bordered cells from the canvas origin.
fn draw_grid(
    frame: &mut Frame,
    canvas: Rect,
    grid: &Grid,
    cursor: Position,
    cell_size: (u16, u16),
) {
    let (cell_width, cell_height) = cell_size;
    for pos in (0..CELLS_PER_AXIS * CELLS_PER_AXIS).filter_map(Position::from_index) {
        let area = Rect::new(
            canvas.x + pos.column() as u16 * cell_width,
            canvas.y + pos.row() as u16 * cell_height,
            cell_width,
            cell_height,
        );
        draw_cell(frame, area, grid.get(pos), pos == cursor);
    }
}

fn draw_too_small(frame: &mut Frame) {
    let area = frame.area();
    let message = Paragraph::new("Terminal too small")
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);
    let middle = Rect::new(
        area.x,
        area.y + area.height / 2,
        area.width,
        area.height.min(1),
    );
    frame.render_widget(message, middle);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, highlighted: bool) {
    let border = if highlighted {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let block = Block::bordered().border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(player) = cell.mark() else {
        return;
    };
    if inner.is_empty() {
        return;
    }
    let style = match player {
        Player::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Player::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    let middle = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
    let glyph = Paragraph::new(Line::from(Span::styled(player.to_string(), style)))
        .alignment(Alignment::Center);
    frame.render_widget(glyph, middle);
}

fn draw_notification(frame: &mut Frame, canvas: Rect, message: &str) {
    let width = (message.len() as u16 + 6).max(28);
    let area = center_rect(canvas, width, 5);

    let popup = Paragraph::new(vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("press any key"),
    ])
    .alignment(Alignment::Center)
    .block(Block::bordered().title("Game over"));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
