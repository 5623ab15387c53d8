//! Console game loop: prompts the human, lets the computer answer, repeats.

use crate::input::parse_coordinates;
use crate::render::render;
use noughts_core::{GameSession, GameStatus, Player, Strategy};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument, warn};

const INPUT_HINT: &str = "input position like 1 a";

/// Results of the games played in one console run, from the human's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    /// Games the human won, including computer resignations.
    pub wins: u32,
    /// Games the computer won.
    pub losses: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Scoreboard {
    /// Total number of finished games.
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    fn tally(&mut self, status: GameStatus) {
        match status.winner() {
            Some(Player::First) => self.wins += 1,
            Some(Player::Second) => self.losses += 1,
            None => self.draws += 1,
        }
    }
}

/// Runs games over any line-oriented input and text output.
pub struct Console<R, W> {
    input: R,
    output: W,
    strategy: Strategy,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console playing against `strategy`.
    pub fn new(input: R, output: W, strategy: Strategy) -> Self {
        Self {
            input,
            output,
            strategy,
        }
    }

    /// Plays games back to back until input runs out or `limit` games finish.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error from reading or writing.
    #[instrument(skip(self), fields(strategy = %self.strategy))]
    pub fn run(&mut self, limit: Option<u32>) -> io::Result<Scoreboard> {
        let mut scoreboard = Scoreboard::default();

        while limit.is_none_or(|limit| scoreboard.games() < limit) {
            match self.play_game()? {
                Some(status) => scoreboard.tally(status),
                None => {
                    info!("Input closed, leaving");
                    break;
                }
            }
        }

        info!(?scoreboard, "Console run finished");
        Ok(scoreboard)
    }

    /// Plays one game. Returns `None` if input ends before the game does.
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> io::Result<Option<GameStatus>> {
        self.show_start_message()?;
        let mut session = GameSession::new(self.strategy);

        loop {
            write!(self.output, "{}", render(session.board()))?;

            let status = session.status();
            if status.is_over() {
                self.show_end_message(status)?;
                log_record(&session);
                return Ok(Some(status));
            }

            match session.to_move() {
                Player::First => {
                    if !self.read_human_move(&mut session)? {
                        return Ok(None);
                    }
                }
                Player::Second => {
                    session.play_second().map_err(|e| {
                        warn!(error = %e, "Computer move rejected");
                        io::Error::other(e)
                    })?;
                    writeln!(self.output)?;
                }
            }
        }
    }

    /// Prompts until the human enters a legal move. Returns `false` on end of input.
    ///
    /// Bytes that are not UTF-8 are decoded lossily and rejected like any
    /// other malformed line.
    fn read_human_move(&mut self, session: &mut GameSession) -> io::Result<bool> {
        let mut buf = Vec::new();
        loop {
            write!(self.output, "? ")?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(false);
            }
            let line = String::from_utf8_lossy(&buf);

            let Some((x, y)) = parse_coordinates(&line) else {
                debug!(input = line.trim(), "Unparseable move");
                writeln!(self.output, "{INPUT_HINT}")?;
                continue;
            };

            match session.play_first(x, y) {
                Ok(_) => return Ok(true),
                Err(e) => {
                    debug!(error = %e, "Invalid move");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }

    fn show_start_message(&mut self) -> io::Result<()> {
        writeln!(self.output, "========================")?;
        writeln!(self.output, "       GAME START       ")?;
        writeln!(self.output)?;
        writeln!(self.output, "{INPUT_HINT}")?;
        writeln!(self.output, "========================")
    }

    fn show_end_message(&mut self, status: GameStatus) -> io::Result<()> {
        let message = match status.winner() {
            Some(Player::First) => "You win!",
            Some(Player::Second) => "You lose...",
            None => "Draw",
        };
        writeln!(self.output, "{message}")?;
        writeln!(self.output)
    }
}

fn log_record(session: &GameSession) {
    match serde_json::to_string(&session.to_record()) {
        Ok(record) => info!(%record, "Game finished"),
        Err(e) => warn!(error = %e, "Failed to serialize game record"),
    }
}
