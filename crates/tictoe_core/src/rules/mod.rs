//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Grid`]. The game phase is never stored;
//! it is derived from the latest grid each time it is needed.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{TRIPLES, check_winner};

use super::{Grid, Outcome};
use tracing::{debug, instrument};

/// Evaluates a grid: a completed triple wins, otherwise a full grid draws.
#[instrument(skip(grid))]
pub fn evaluate_outcome(grid: &Grid) -> Outcome {
    let outcome = if let Some(winner) = check_winner(grid) {
        Outcome::Win(winner)
    } else if is_draw(grid) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    };
    debug!(?outcome, "Evaluated grid");
    outcome
}
