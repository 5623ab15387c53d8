//! Board coordinates.

use super::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 3;

/// A validated square on the 3x3 board.
///
/// `x` is the column and `y` the row, both in `0..3`. Positions order
/// row-major, which is the scan order every selector uses. Deserialization
/// goes through [`Position::new`], so off-board coordinates are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    y: u8,
    x: u8,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position { y: 0, x: 0 },
        Position { y: 0, x: 1 },
        Position { y: 0, x: 2 },
        Position { y: 1, x: 0 },
        Position { y: 1, x: 1 },
        Position { y: 1, x: 2 },
        Position { y: 2, x: 0 },
        Position { y: 2, x: 1 },
        Position { y: 2, x: 2 },
    ];

    /// The center square.
    pub const CENTER: Position = Position { y: 1, x: 1 };

    /// Creates a position from a column and row, if both are on the board.
    #[instrument]
    pub fn new(x: usize, y: usize) -> Option<Self> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return None;
        }
        Some(Self {
            x: x as u8,
            y: y as u8,
        })
    }

    /// Creates position from a row-major board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Column, 0-based.
    pub fn x(self) -> usize {
        self.x as usize
    }

    /// Row, 0-based.
    pub fn y(self) -> usize {
        self.y as usize
    }

    /// Converts position to a row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self.y() * BOARD_SIZE + self.x()
    }
}

/// Unchecked wire form of a [`Position`].
#[derive(Deserialize)]
struct RawPosition {
    x: usize,
    y: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = MoveError;

    fn try_from(RawPosition { x, y }: RawPosition) -> Result<Self, Self::Error> {
        Position::new(x, y).ok_or(MoveError::OutOfBounds { x, y })
    }
}

impl std::fmt::Display for Position {
    /// Formats in the console notation: 1-based column digit, then row letter.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.x + 1, char::from(b'a' + self.y))
    }
}
