//! Move selection for the computer opponent.

mod first_available;
mod minimax;

pub use first_available::FirstAvailable;
pub use minimax::Minimax;

use super::{Board, Position};
use serde::{Deserialize, Serialize};

/// A strategy that chooses and plays Second's move.
pub trait MoveSelector: std::fmt::Debug {
    /// Picks a move for Second and applies it to `board`.
    ///
    /// Returns the square played, or `None` when there is no legal move,
    /// which the caller treats as a resignation.
    fn select_and_apply(&mut self, board: &mut Board) -> Option<Position>;

    /// Returns the selector's display name.
    fn name(&self) -> &str;
}

/// The available opponent strategies.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Plays the first empty square in row-major order.
    FirstAvailable,
    /// Plays the minimax-optimal square.
    #[default]
    Minimax,
}

impl Strategy {
    /// Builds a fresh selector for this strategy.
    pub fn selector(self) -> Box<dyn MoveSelector> {
        match self {
            Strategy::FirstAvailable => Box::new(FirstAvailable),
            Strategy::Minimax => Box::new(Minimax::new()),
        }
    }
}
