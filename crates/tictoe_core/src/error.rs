//! Engine error types.

use derive_more::{Display, Error};

/// Error returned by the game engine.
///
/// Moves on occupied cells are not errors; they are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Cell index outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", index)]
    InvalidIndex {
        /// The rejected index.
        index: isize,
    },
}
