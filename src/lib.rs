//! Noughts - console tic-tac-toe
//!
//! Terminal front end for [`noughts_core`]: reads moves typed as a column
//! digit and row letter (`1 a`), draws the board, and loops games forever.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod input;
mod render;

pub use cli::Cli;
pub use console::{Console, Scoreboard};
pub use input::parse_coordinates;
pub use render::render;
