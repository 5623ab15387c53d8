//! Exhaustive minimax search for Second.
//!
//! Scores are from Second's point of view. A win is worth `10 - depth` and a
//! loss `depth - 10`, so quicker wins and slower losses are preferred. The
//! search mutates the board in place and undoes every trial move before
//! returning.

use super::MoveSelector;
use crate::{Board, Player, Position};
use tracing::{debug, instrument};

/// Score of an immediate win.
const WIN_SCORE: i32 = 10;

/// Full-depth minimax selector.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    nodes: u64,
}

impl Minimax {
    /// Creates a new minimax selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of positions visited during the most recent search.
    pub fn nodes_searched(&self) -> u64 {
        self.nodes
    }

    /// Finds Second's best move and its score without playing it.
    ///
    /// Candidates are tried in row-major order and only a strictly better
    /// score replaces the current best, so ties go to the earliest square.
    /// The board is left exactly as it was passed in.
    #[instrument(skip_all)]
    pub fn best_move(&mut self, board: &mut Board) -> Option<(Position, i32)> {
        self.nodes = 0;
        let mut best: Option<(Position, i32)> = None;

        for position in Position::ALL {
            if !board.is_empty(position) {
                continue;
            }
            let score = board.trial(position, Player::Second, |b| self.minimax(b, 0, false));
            debug!(%position, score, "Scored candidate");
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((position, score));
            }
        }

        best
    }

    fn minimax(&mut self, board: &mut Board, depth: i32, maximizing: bool) -> i32 {
        self.nodes += 1;

        match board.winner() {
            Some(Player::Second) => return WIN_SCORE - depth,
            Some(Player::First) => return depth - WIN_SCORE,
            None => {}
        }
        if board.is_full() {
            return 0;
        }

        let (mover, mut best) = if maximizing {
            (Player::Second, i32::MIN)
        } else {
            (Player::First, i32::MAX)
        };

        for position in Position::ALL {
            if !board.is_empty(position) {
                continue;
            }
            let score = board.trial(position, mover, |b| self.minimax(b, depth + 1, !maximizing));
            best = if maximizing { best.max(score) } else { best.min(score) };
        }

        best
    }
}

impl MoveSelector for Minimax {
    #[instrument(skip_all)]
    fn select_and_apply(&mut self, board: &mut Board) -> Option<Position> {
        let (position, score) = self.best_move(board)?;
        board.apply_move(position, Player::Second).ok()?;
        debug!(%position, score, nodes = self.nodes, "Minimax selector chose position");
        Some(position)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}
