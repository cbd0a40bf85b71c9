//! Pure tic-tac-toe game state.
//!
//! [`GameState`] owns the grid history and turn order; [`evaluate_outcome`]
//! derives win/draw from a single [`Grid`]. Nothing here touches a terminal,
//! so everything can be exercised without a drawing surface.
//!
//! ```
//! use tictoe_core::{GameState, Outcome, Player};
//!
//! let mut game = GameState::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index)?;
//! }
//! assert_eq!(game.outcome(), Outcome::Win(Player::X));
//! # Ok::<(), tictoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
pub mod rules;
mod types;

pub use error::GameError;
pub use game::{GameState, MoveResult};
pub use position::Position;
pub use rules::evaluate_outcome;
pub use types::{CELL_COUNT, CELLS_PER_AXIS, Cell, Grid, Outcome, Player};
