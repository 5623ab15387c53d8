//! Parsing of typed coordinates.

use tracing::instrument;

/// Parses a move typed as a 1-based column digit followed by a row letter.
///
/// `"1 a"`, `"1a"` and `"1A"` all name column 0, row 0. Returns 0-based
/// `(x, y)` without checking them against the board; the board rejects
/// anything off the grid.
#[instrument]
pub fn parse_coordinates(line: &str) -> Option<(usize, usize)> {
    let mut chars = line.chars().filter(|c| !c.is_whitespace());
    let column = chars.next()?;
    let row = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    let x = column.to_digit(10)?.checked_sub(1)?;
    let y = u32::from(row.to_ascii_lowercase()).checked_sub(u32::from('a'))?;
    Some((x as usize, y as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_with_and_without_space() {
        assert_eq!(parse_coordinates("1 a"), Some((0, 0)));
        assert_eq!(parse_coordinates("3c"), Some((2, 2)));
        assert_eq!(parse_coordinates("  2   b \n"), Some((1, 1)));
    }

    #[test]
    fn test_accepts_uppercase_row() {
        assert_eq!(parse_coordinates("2C"), Some((1, 2)));
    }

    #[test]
    fn test_off_board_values_pass_through() {
        assert_eq!(parse_coordinates("9 z"), Some((8, 25)));
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert_eq!(parse_coordinates(""), None);
        assert_eq!(parse_coordinates("1"), None);
        assert_eq!(parse_coordinates("0a"), None);
        assert_eq!(parse_coordinates("a1"), None);
        assert_eq!(parse_coordinates("1 a b"), None);
    }
}
