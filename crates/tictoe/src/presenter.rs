//! Bridges terminal input to the game engine and tracks what to show.
//!
//! The [`Presenter`] owns the single [`GameState`] for the session. Every
//! handler runs to completion (move, evaluate, notify, restart) before the
//! next event is read, so the history is never observed half-updated.
//! Drawing lives in [`crate::ui`] and only ever sees `&Presenter`.

use crate::config::{MIN_CELL_SIZE, TuiConfig};
use crate::input::{self, Command, Direction};
use crate::ui;
use derive_getters::Getters;
use ratatui::layout::Rect;
use tictoe_core::{CELLS_PER_AXIS, GameError, GameState, MoveResult, Outcome, Player, Position};
use tracing::{debug, info, instrument};

/// Message shown when a game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Notification {
    /// A player completed a triple.
    #[display("Player {} wins!", _0)]
    Win(Player),
    /// The board filled up without a triple.
    #[display("It's a draw!")]
    Draw,
}

/// What the event loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading events.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Converts canvas-local coordinates to a row-major cell index.
///
/// Coordinates outside the canvas give indices outside 0-8 (or indices of
/// the wrong cell), so callers must bounds-check first. Zero cell sizes are
/// treated as one.
pub fn point_to_cell(
    x: i32,
    y: i32,
    cell_width: u16,
    cell_height: u16,
    axis_count: usize,
) -> isize {
    let column = x.div_euclid(i32::from(cell_width.max(1)));
    let row = y.div_euclid(i32::from(cell_height.max(1)));
    row as isize * axis_count as isize + column as isize
}

/// Label naming the player to move.
pub fn turn_label(player: Player) -> String {
    format!("Player {}'s Turn", player)
}

/// Session state for the terminal front end.
#[derive(Debug, Getters)]
pub struct Presenter {
    game: GameState,
    /// Largest cell size allowed by the config.
    #[getter(skip)]
    max_cell_size: (u16, u16),
    /// Cell width in use, fitted to the last frame.
    cell_width: u16,
    /// Cell height in use, fitted to the last frame.
    cell_height: u16,
    /// Board rectangle in terminal coordinates, as of the last resize.
    /// Empty when the frame cannot hold a board of minimum-size cells.
    canvas: Rect,
    cursor: Position,
    notification: Option<Notification>,
    #[getter(skip)]
    needs_redraw: bool,
}

impl Presenter {
    /// Creates a presenter with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        info!(
            cell_width = config.cell_width(),
            cell_height = config.cell_height(),
            "Creating presenter"
        );
        Self {
            game: GameState::new(),
            max_cell_size: (*config.cell_width(), *config.cell_height()),
            cell_width: *config.cell_width(),
            cell_height: *config.cell_height(),
            canvas: Rect::default(),
            cursor: Position::Center,
            notification: None,
            needs_redraw: true,
        }
    }

    /// Recomputes cell size and board rectangle for a frame of the given size.
    ///
    /// Cells shrink from the configured size to fit the frame, never below
    /// [`MIN_CELL_SIZE`]. If even that does not fit, the canvas is empty and
    /// pointer input is ignored until the frame grows.
    #[instrument(skip(self))]
    pub fn resize(&mut self, area: Rect) {
        let region = ui::board_region(area);
        let axis = CELLS_PER_AXIS as u16;
        let (max_width, max_height) = self.max_cell_size;
        let cell_width = max_width.min(region.width / axis);
        let cell_height = max_height.min(region.height / axis);

        let canvas = if cell_width < MIN_CELL_SIZE || cell_height < MIN_CELL_SIZE {
            Rect::default()
        } else {
            self.cell_width = cell_width;
            self.cell_height = cell_height;
            ui::layout(area, self.board_width(), self.board_height()).board
        };

        if canvas != self.canvas {
            debug!(?canvas, cell_width, cell_height, "Canvas moved");
            self.canvas = canvas;
        }
    }

    /// False when the last frame was too small to draw the board.
    pub fn board_fits(&self) -> bool {
        !self.canvas.is_empty()
    }

    /// Full board width in terminal columns.
    pub fn board_width(&self) -> u16 {
        self.cell_width.saturating_mul(CELLS_PER_AXIS as u16)
    }

    /// Full board height in terminal rows.
    pub fn board_height(&self) -> u16 {
        self.cell_height.saturating_mul(CELLS_PER_AXIS as u16)
    }

    /// Returns whether a redraw is due, clearing the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Dispatches a translated input command.
    ///
    /// # Errors
    ///
    /// Propagates [`GameError::InvalidIndex`] from the engine.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Result<Flow, GameError> {
        match command {
            Command::PointerDown { x, y } => self.on_pointer_down(x, y)?,
            Command::Select(pos) => self.on_cell_selected(pos),
            Command::SelectCursor => self.on_cell_selected(self.cursor),
            Command::MoveCursor(direction) => self.on_cursor_moved(direction),
            Command::Restart => self.on_restart_requested(),
            Command::Cancel => {
                if !self.dismiss_notification() {
                    return Ok(Flow::Quit);
                }
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Redraw => self.needs_redraw = true,
        }
        Ok(Flow::Continue)
    }

    /// Handles a pointer press at terminal coordinates.
    ///
    /// Presses outside the canvas are ignored. While a notification is
    /// showing, the press only dismisses it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidIndex`] if the computed index falls
    /// outside the board.
    #[instrument(skip(self))]
    pub fn on_pointer_down(&mut self, x: u16, y: u16) -> Result<(), GameError> {
        if self.dismiss_notification() {
            return Ok(());
        }

        let Some((local_x, local_y)) = self.canvas_local(x, y) else {
            debug!(canvas = ?self.canvas, "Press outside canvas ignored");
            return Ok(());
        };

        let index = point_to_cell(
            local_x,
            local_y,
            self.cell_width,
            self.cell_height,
            CELLS_PER_AXIS,
        );
        let result = self.game.apply_move(index)?;
        if let Some(pos) = usize::try_from(index).ok().and_then(Position::from_index) {
            self.cursor = pos;
        }
        self.after_move(result);
        Ok(())
    }

    /// Plays the current player's mark at `pos` (keyboard selection).
    #[instrument(skip(self))]
    pub fn on_cell_selected(&mut self, pos: Position) {
        if self.dismiss_notification() {
            return;
        }
        self.cursor = pos;
        let result = self.game.place(pos);
        self.after_move(result);
    }

    /// Starts a fresh game and schedules a redraw.
    #[instrument(skip(self))]
    pub fn on_restart_requested(&mut self) {
        self.game.restart();
        self.notification = None;
        self.needs_redraw = true;
    }

    fn on_cursor_moved(&mut self, direction: Direction) {
        if self.dismiss_notification() {
            return;
        }
        let moved = input::move_cursor(self.cursor, direction);
        if moved != self.cursor {
            self.cursor = moved;
            self.needs_redraw = true;
        }
    }

    fn after_move(&mut self, result: MoveResult) {
        let MoveResult::Placed(player) = result else {
            debug!("Occupied cell, nothing to do");
            return;
        };
        self.needs_redraw = true;

        let notification = match self.game.outcome() {
            Outcome::InProgress => return,
            Outcome::Win(winner) => Notification::Win(winner),
            Outcome::Draw => Notification::Draw,
        };
        info!(%player, %notification, grid = %self.game.latest(), "Game over");
        self.notification = Some(notification);
        self.game.restart();
    }

    fn dismiss_notification(&mut self) -> bool {
        match self.notification.take() {
            Some(notification) => {
                debug!(%notification, "Notification dismissed");
                self.needs_redraw = true;
                true
            }
            None => false,
        }
    }

    fn canvas_local(&self, x: u16, y: u16) -> Option<(i32, i32)> {
        let canvas = self.canvas;
        let inside = x >= canvas.x
            && x < canvas.x.saturating_add(canvas.width)
            && y >= canvas.y
            && y < canvas.y.saturating_add(canvas.height);
        inside.then(|| (i32::from(x - canvas.x), i32::from(y - canvas.y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_to_cell_formula() {
        assert_eq!(point_to_cell(0, 0, 10, 4, 3), 0);
        assert_eq!(point_to_cell(25, 0, 10, 4, 3), 2);
        assert_eq!(point_to_cell(10, 4, 10, 4, 3), 4);
        assert_eq!(point_to_cell(29, 11, 10, 4, 3), 8);
    }

    #[test]
    fn test_point_to_cell_out_of_range() {
        assert_eq!(point_to_cell(0, 12, 10, 4, 3), 9);
        assert_eq!(point_to_cell(-1, 0, 10, 4, 3), -1);
    }

    #[test]
    fn test_notification_text() {
        assert_eq!(Notification::Win(Player::O).to_string(), "Player O wins!");
        assert_eq!(Notification::Draw.to_string(), "It's a draw!");
        assert_eq!(turn_label(Player::X), "Player X's Turn");
    }
}
