//! Terminal-state classification of a board.

use super::Player;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
///
/// Always recomputed from board contents; never stored on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    Unfinished,
    /// First has three in a row.
    FirstWins,
    /// Second has three in a row.
    SecondWins,
    /// Every square is filled and nobody has a line.
    Draw,
}

impl Outcome {
    /// Builds the winning outcome for `player`.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::First => Outcome::FirstWins,
            Player::Second => Outcome::SecondWins,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::FirstWins => Some(Player::First),
            Outcome::SecondWins => Some(Player::Second),
            Outcome::Unfinished | Outcome::Draw => None,
        }
    }

    /// Returns true unless the game can continue.
    pub fn is_terminal(self) -> bool {
        self != Outcome::Unfinished
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Unfinished => write!(f, "Unfinished"),
            Outcome::FirstWins => write!(f, "First wins"),
            Outcome::SecondWins => write!(f, "Second wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
