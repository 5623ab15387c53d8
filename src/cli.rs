//! Command-line interface for noughts.

use clap::Parser;
use noughts_core::Strategy;

/// Noughts - tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Computer opponent: first-available or minimax
    #[arg(short, long, default_value = "minimax")]
    pub opponent: Strategy,

    /// Stop after this many games (plays until input ends if omitted)
    #[arg(short, long)]
    pub games: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_minimax() {
        let cli = Cli::try_parse_from(["noughts"]).unwrap();
        assert_eq!(cli.opponent, Strategy::Minimax);
        assert_eq!(cli.games, None);
    }

    #[test]
    fn test_parses_opponent_and_games() {
        let cli = Cli::try_parse_from(["noughts", "--opponent", "first-available", "-g", "3"])
            .unwrap();
        assert_eq!(cli.opponent, Strategy::FirstAvailable);
        assert_eq!(cli.games, Some(3));
    }

    #[test]
    fn test_rejects_unknown_opponent() {
        assert!(Cli::try_parse_from(["noughts", "--opponent", "random"]).is_err());
    }
}
