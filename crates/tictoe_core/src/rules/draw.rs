//! Draw detection logic for tic-tac-toe.

use super::super::Grid;
use super::win::check_winner;
use tracing::instrument;

/// A full grid with no winner is a draw.
#[instrument(skip(grid))]
pub fn is_draw(grid: &Grid) -> bool {
    grid.is_full() && check_winner(grid).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player, Position};
    use strum::IntoEnumIterator;

    #[test]
    fn test_empty_grid_not_draw() {
        assert!(!is_draw(&Grid::new()));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        #[rustfmt::skip]
        let marks = [
            Player::X, Player::O, Player::X,
            Player::O, Player::X, Player::X,
            Player::O, Player::X, Player::O,
        ];
        let mut grid = Grid::new();
        for (pos, player) in Position::iter().zip(marks) {
            grid.set(pos, Cell::Marked(player));
        }
        assert!(is_draw(&grid));
    }

    #[test]
    fn test_full_grid_of_one_mark_not_draw() {
        let mut grid = Grid::new();
        for pos in Position::iter() {
            grid.set(pos, Cell::Marked(Player::X));
        }
        assert!(grid.is_full());
        assert!(!is_draw(&grid));
    }
}
