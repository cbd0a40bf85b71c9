//! Game state engine: grid history and turn order.

use super::error::GameError;
use super::position::Position;
use super::rules::evaluate_outcome;
use super::types::{Cell, Grid, Outcome, Player};
use tracing::{debug, info, instrument};

/// Result of an accepted move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The player's mark was placed and the turn passed.
    Placed(Player),
    /// The cell was already occupied; nothing changed.
    Ignored,
}

/// Complete game state.
///
/// The history is every grid snapshot since the game started, oldest first.
/// It always holds at least one grid: earlier snapshots live in `past` and
/// the authoritative grid is `current`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    past: Vec<Grid>,
    current: Grid,
    current_player: Player,
}

impl GameState {
    /// Creates a new game: one empty grid, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_grid(Grid::new())
    }

    /// Creates a game starting from the given grid, X to move.
    #[instrument]
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            past: Vec::new(),
            current: grid,
            current_player: Player::X,
        }
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the latest grid.
    pub fn latest(&self) -> &Grid {
        &self.current
    }

    /// Iterates over the grid history, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Grid> {
        self.past.iter().chain(std::iter::once(&self.current))
    }

    /// Number of grids in the history (at least one).
    pub fn history_len(&self) -> usize {
        self.past.len() + 1
    }

    /// Evaluates the latest grid.
    pub fn outcome(&self) -> Outcome {
        evaluate_outcome(&self.current)
    }

    /// Plays the current player's mark at a raw cell index.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidIndex`] when `index` is outside 0-8. The
    /// state is untouched in that case.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: isize) -> Result<MoveResult, GameError> {
        let pos = Position::try_from(index)?;
        Ok(self.place(pos))
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// An occupied cell leaves the state unchanged and yields
    /// [`MoveResult::Ignored`].
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place(&mut self, pos: Position) -> MoveResult {
        if !self.current.is_empty(pos) {
            debug!(position = %pos, "Cell occupied, move ignored");
            return MoveResult::Ignored;
        }

        let player = self.current_player;
        let mut next = self.current;
        next.set(pos, Cell::Marked(player));
        self.past.push(std::mem::replace(&mut self.current, next));
        self.current_player = player.opponent();

        debug!(position = %pos, history = self.history_len(), grid = %self.current, "Move placed");
        MoveResult::Placed(player)
    }

    /// Resets to a single empty grid with X to move.
    #[instrument(skip(self), fields(history = self.history_len()))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        *self = Self::new();
    }

    /// Drops the latest grid, undoing one move.
    ///
    /// Returns `false` (and does nothing) when only the starting grid is
    /// left. The player to move is not changed.
    #[instrument(skip(self), fields(history = self.history_len()))]
    pub fn roll_back(&mut self) -> bool {
        match self.past.pop() {
            Some(previous) => {
                self.current = previous;
                debug!("Rolled back one move");
                true
            }
            None => false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
