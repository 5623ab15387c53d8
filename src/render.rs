//! Text rendering of the board.

use noughts_core::{Board, Player, Square};

/// Glyph for a square: `O` for the human, `X` for the computer.
fn glyph(square: Square) -> char {
    match square {
        Square::Empty => ' ',
        Square::Occupied(Player::First) => 'O',
        Square::Occupied(Player::Second) => 'X',
    }
}

/// Formats the board with column numbers on top and row letters on the left.
pub fn render(board: &Board) -> String {
    const SEPARATOR: &str = "  +-+-+-+\n";

    let mut out = String::from("   1 2 3\n");
    out.push_str(SEPARATOR);
    for (row_label, row) in ('a'..='c').zip(board.rows()) {
        out.push(row_label);
        out.push(' ');
        for square in row {
            out.push('|');
            out.push(glyph(square));
        }
        out.push_str("|\n");
        out.push_str(SEPARATOR);
    }
    out
}
