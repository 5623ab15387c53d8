//! Noughts core - tic-tac-toe rules and computer opponents
//!
//! Pure, synchronous game logic with no I/O.
//!
//! # Architecture
//!
//! - **Cell / Board**: write-once squares on a 3x3 grid, with terminal-state detection
//! - **Selectors**: first-available and minimax strategies for the computer (Second)
//! - **Session**: one game between the human (First) and a selector
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameSession, GameStatus, Position, Strategy};
//!
//! let mut session = GameSession::new(Strategy::Minimax);
//! session.play_first(0, 0).unwrap();
//! session.play_second().unwrap();
//! assert_eq!(session.history()[1].position, Position::CENTER);
//! assert_eq!(session.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod outcome;
mod position;
mod selector;
mod session;
mod types;

pub use board::Board;
pub use error::MoveError;
pub use outcome::Outcome;
pub use position::{BOARD_SIZE, Position};
pub use selector::{FirstAvailable, Minimax, MoveSelector, Strategy};
pub use session::{GameRecord, GameSession, GameStatus, Move};
pub use types::{Cell, Player, Square};
