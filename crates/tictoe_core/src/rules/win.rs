//! Win detection logic for tic-tac-toe.

use super::super::{Cell, Grid, Player, Position};
use tracing::instrument;

/// The eight winning lines, in evaluation order: rows, columns, diagonals.
pub const TRIPLES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the grid.
///
/// Returns the owner of the first triple (in [`TRIPLES`] order) holding three
/// equal marks, `None` otherwise.
#[instrument(skip(grid))]
pub fn check_winner(grid: &Grid) -> Option<Player> {
    TRIPLES.iter().find_map(|&[a, b, c]| match grid.get(a) {
        Cell::Marked(player) if grid.get(b) == grid.get(a) && grid.get(c) == grid.get(a) => {
            Some(player)
        }
        _ => None,
    })
}
