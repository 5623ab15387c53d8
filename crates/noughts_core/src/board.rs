//! The 3x3 board and terminal-state detection.

use super::position::BOARD_SIZE;
use super::{Cell, MoveError, Outcome, Player, Position, Square};
use tracing::{debug, instrument};

/// Winning lines as row-major indices.
#[rustfmt::skip]
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// 3x3 tic-tac-toe board of write-once cells, stored row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a First mark at column `x`, row `y`.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfBounds` for coordinates outside the board and
    /// `MoveError::Occupied` if the square is already taken.
    #[instrument(skip(self))]
    pub fn apply_first_player_move(&mut self, x: usize, y: usize) -> Result<Position, MoveError> {
        let position = Position::new(x, y).ok_or(MoveError::OutOfBounds { x, y })?;
        self.apply_move(position, Player::First)?;
        Ok(position)
    }

    /// Places `player`'s mark on an empty square.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::Occupied` if the square is already taken.
    pub fn apply_move(&mut self, position: Position, player: Player) -> Result<(), MoveError> {
        if !self.cell_mut(position).write(player) {
            debug!(%position, ?player, "Rejected move onto occupied square");
            return Err(MoveError::Occupied { position });
        }
        Ok(())
    }

    /// Gets the square at the given position.
    pub fn square(&self, position: Position) -> Square {
        self.cells[position.y()][position.x()].read()
    }

    /// Gets the square at column `x`, row `y`, if on the board.
    pub fn get(&self, x: usize, y: usize) -> Option<Square> {
        Position::new(x, y).map(|position| self.square(position))
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.square(position).is_empty()
    }

    /// Returns the board contents row by row.
    pub fn rows(&self) -> [[Square; BOARD_SIZE]; BOARD_SIZE] {
        self.cells.map(|row| row.map(|cell| cell.read()))
    }

    /// Returns the empty squares in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&position| self.is_empty(position))
    }

    /// Number of marks on the board.
    pub fn occupied_count(&self) -> usize {
        Position::ALL
            .into_iter()
            .filter(|&position| !self.is_empty(position))
            .count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.empty_positions().next().is_none()
    }

    /// Checks for a player with three in a row.
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|&[a, b, c]| {
            let square = self.square(Position::ALL[a]);
            if square == self.square(Position::ALL[b]) && square == self.square(Position::ALL[c]) {
                square.player()
            } else {
                None
            }
        })
    }

    /// Classifies the board: a completed line wins, otherwise a full board is
    /// a draw and anything else is unfinished.
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(player) => Outcome::win_for(player),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::Unfinished,
        }
    }

    /// Tries `player` at an empty `position`, runs `f` on the resulting board,
    /// and clears the square again before returning `f`'s result.
    pub(crate) fn trial<R>(
        &mut self,
        position: Position,
        player: Player,
        f: impl FnOnce(&mut Board) -> R,
    ) -> R {
        debug_assert!(self.is_empty(position), "trial move onto occupied square");
        self.cell_mut(position).set_unchecked(player);
        let result = f(self);
        self.cell_mut(position).clear();
        result
    }

    fn cell_mut(&mut self, position: Position) -> &mut Cell {
        &mut self.cells[position.y()][position.x()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let player = match ch {
                    'O' => Player::First,
                    'X' => Player::Second,
                    _ => continue,
                };
                let position = Position::new(x, y).unwrap();
                board.apply_move(position, player).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_empty_board_unfinished() {
        assert_eq!(Board::new().outcome(), Outcome::Unfinished);
    }

    #[test]
    fn test_second_wins_top_row() {
        let board = board_from(["XXX", "...", "..."]);
        assert_eq!(board.outcome(), Outcome::SecondWins);
    }

    #[test]
    fn test_first_wins_column() {
        let board = board_from([".O.", "XOX", ".O."]);
        assert_eq!(board.outcome(), Outcome::FirstWins);
    }

    #[test]
    fn test_diagonals() {
        assert_eq!(board_from(["O..", ".O.", "..O"]).outcome(), Outcome::FirstWins);
        assert_eq!(board_from(["..X", ".X.", "X.."]).outcome(), Outcome::SecondWins);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from(["OXO", "OXX", "XOO"]);
        assert!(board.is_full());
        assert_eq!(board.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        let board = board_from(["OOO", "XXO", "XOX"]);
        assert_eq!(board.outcome(), Outcome::FirstWins);
    }

    #[test]
    fn test_apply_first_player_move() {
        let mut board = Board::new();
        assert_eq!(board.apply_first_player_move(2, 1).map(Position::to_index), Ok(5));
        assert_eq!(board.get(2, 1), Some(Square::Occupied(Player::First)));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_apply_first_player_move_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(
            board.apply_first_player_move(3, 0),
            Err(MoveError::OutOfBounds { x: 3, y: 0 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_apply_first_player_move_occupied() {
        let mut board = board_from(["...", ".X.", "..."]);
        let before = board.clone();
        assert_eq!(
            board.apply_first_player_move(1, 1),
            Err(MoveError::Occupied {
                position: Position::CENTER
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_trial_restores_square() {
        let mut board = board_from(["O..", "...", "..."]);
        let before = board.clone();
        let seen = board.trial(Position::CENTER, Player::Second, |b| b.square(Position::CENTER));
        assert_eq!(seen, Square::Occupied(Player::Second));
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_positions_row_major() {
        let board = board_from(["OX.", "...", "..X"]);
        let empty: Vec<_> = board.empty_positions().map(Position::to_index).collect();
        assert_eq!(empty, vec![2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_rows_reflect_cells() {
        let board = board_from(["O..", "...", "..X"]);
        let rows = board.rows();
        assert_eq!(rows[0][0], Square::Occupied(Player::First));
        assert_eq!(rows[2][2], Square::Occupied(Player::Second));
        assert_eq!(rows[1][1], Square::Empty);
    }
}
