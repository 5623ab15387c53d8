//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// The human player (moves first).
    First,
    /// The computer player (moves second).
    Second,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

/// The state of a single square on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// A write-once board cell.
///
/// Normal play can only fill an empty cell. The search engine is the only
/// caller allowed to clear a cell, and only to undo its own trial moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    square: Square,
}

impl Cell {
    /// Returns the current state of the cell.
    pub fn read(&self) -> Square {
        self.square
    }

    /// Marks the cell for `player` if it is empty.
    ///
    /// Returns `false` and leaves the cell untouched when it is already taken.
    pub fn write(&mut self, player: Player) -> bool {
        if !self.square.is_empty() {
            return false;
        }
        self.square = Square::Occupied(player);
        true
    }

    pub(crate) fn set_unchecked(&mut self, player: Player) {
        self.square = Square::Occupied(player);
    }

    pub(crate) fn clear(&mut self) {
        self.square = Square::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_empty() {
        assert_eq!(Cell::default().read(), Square::Empty);
    }

    #[test]
    fn test_write_empty_cell() {
        let mut cell = Cell::default();
        assert!(cell.write(Player::First));
        assert_eq!(cell.read(), Square::Occupied(Player::First));
    }

    #[test]
    fn test_second_write_fails() {
        let mut cell = Cell::default();
        assert!(cell.write(Player::Second));
        assert!(!cell.write(Player::First));
        assert!(!cell.write(Player::Second));
        assert_eq!(cell.read(), Square::Occupied(Player::Second));
    }

    #[test]
    fn test_clear_restores_empty() {
        let mut cell = Cell::default();
        cell.set_unchecked(Player::First);
        cell.clear();
        assert!(cell.read().is_empty());
        assert!(cell.write(Player::Second));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::First.opponent(), Player::Second);
        assert_eq!(Player::Second.opponent(), Player::First);
    }
}
