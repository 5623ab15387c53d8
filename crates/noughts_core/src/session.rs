//! A single game between the human (First) and a move selector (Second).

use super::{Board, MoveError, MoveSelector, Outcome, Player, Position, Strategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The board is unfinished and nobody has resigned.
    InProgress,
    /// The board reached a terminal outcome.
    Finished(Outcome),
    /// The player had no legal move to make.
    Resigned(Player),
}

impl GameStatus {
    /// Returns true once no more moves are accepted.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Returns the winner, counting a resignation as a win for the opponent.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Finished(outcome) => outcome.winner(),
            GameStatus::Resigned(player) => Some(player.opponent()),
        }
    }

    fn from_outcome(outcome: Outcome) -> Self {
        if outcome.is_terminal() {
            GameStatus::Finished(outcome)
        } else {
            GameStatus::InProgress
        }
    }
}

/// Serializable summary of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Name of the selector Second played with.
    pub opponent: String,
    /// Moves in the order they were played.
    pub moves: Vec<Move>,
    /// Status when the record was taken.
    pub status: GameStatus,
}

/// Owns the board and the opponent for the lifetime of one game.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    selector: Box<dyn MoveSelector>,
    history: Vec<Move>,
    to_move: Player,
    status: GameStatus,
}

impl GameSession {
    /// Starts a new game against the given strategy.
    #[instrument]
    pub fn new(strategy: Strategy) -> Self {
        Self::with_selector(strategy.selector())
    }

    /// Starts a new game against an already-built selector.
    pub fn with_selector(selector: Box<dyn MoveSelector>) -> Self {
        info!(opponent = selector.name(), "Starting new game session");
        Self {
            board: Board::new(),
            selector,
            history: Vec::new(),
            to_move: Player::First,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the session status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player whose move it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the opponent's name.
    pub fn opponent(&self) -> &str {
        self.selector.name()
    }

    /// Plays the human's mark at column `x`, row `y`.
    ///
    /// # Errors
    ///
    /// `MoveError::GameOver` once the session has ended, `MoveError::WrongTurn`
    /// if Second is to move, otherwise whatever
    /// [`Board::apply_first_player_move`] rejects.
    #[instrument(skip(self))]
    pub fn play_first(&mut self, x: usize, y: usize) -> Result<GameStatus, MoveError> {
        self.check_turn(Player::First)?;
        let position = self.board.apply_first_player_move(x, y)?;
        Ok(self.record(Player::First, position))
    }

    /// Lets the selector play Second's move.
    ///
    /// A selector with nothing to play resigns the game for Second.
    ///
    /// # Errors
    ///
    /// `MoveError::GameOver` once the session has ended, `MoveError::WrongTurn`
    /// if First is to move.
    #[instrument(skip(self))]
    pub fn play_second(&mut self) -> Result<GameStatus, MoveError> {
        self.check_turn(Player::Second)?;
        match self.selector.select_and_apply(&mut self.board) {
            Some(position) => Ok(self.record(Player::Second, position)),
            None => {
                info!(opponent = self.selector.name(), "Opponent resigns");
                self.status = GameStatus::Resigned(Player::Second);
                Ok(self.status)
            }
        }
    }

    /// Snapshot of the session for logging.
    pub fn to_record(&self) -> GameRecord {
        GameRecord {
            opponent: self.selector.name().to_string(),
            moves: self.history.clone(),
            status: self.status,
        }
    }

    fn check_turn(&self, player: Player) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.to_move != player {
            return Err(MoveError::WrongTurn { player });
        }
        Ok(())
    }

    fn record(&mut self, player: Player, position: Position) -> GameStatus {
        self.history.push(Move { player, position });
        self.to_move = player.opponent();
        self.status = GameStatus::from_outcome(self.board.outcome());
        debug!(%player, %position, status = ?self.status, "Move recorded");
        self.status
    }
}
