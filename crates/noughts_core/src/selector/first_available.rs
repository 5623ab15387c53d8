//! Selector that takes the first empty square.

use super::MoveSelector;
use crate::{Board, Player, Position};
use tracing::{debug, instrument};

/// Plays the first empty square in row-major order. No look-ahead.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailable;

impl MoveSelector for FirstAvailable {
    #[instrument(skip_all)]
    fn select_and_apply(&mut self, board: &mut Board) -> Option<Position> {
        let position = board.empty_positions().next()?;
        board.apply_move(position, Player::Second).ok()?;
        debug!(%position, "First-available selector chose position");
        Some(position)
    }

    fn name(&self) -> &str {
        "first-available"
    }
}
