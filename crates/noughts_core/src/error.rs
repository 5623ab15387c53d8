//! Move validation errors.

use super::{Player, Position};

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinates are not on the 3x3 board.
    #[display("Position ({x}, {y}) is off the board")]
    OutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {position} is already occupied")]
    Occupied {
        /// The contested square.
        position: Position,
    },

    /// It's the other player's move.
    #[display("It's not {player}'s turn")]
    WrongTurn {
        /// The player who tried to move.
        player: Player,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
