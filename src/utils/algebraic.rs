//! Square conversions for coordinate notation.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`
//! values. Row 0 is rank 8 and row 7 is rank 1; column 0 is file a.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

const ROWS_TO_RANKS: [char; 8] = ['8', '7', '6', '5', '4', '3', '2', '1'];
const COLS_TO_FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

#[inline]
pub fn row_to_rank(row: u8) -> char {
    ROWS_TO_RANKS[row as usize]
}

#[inline]
pub fn col_to_file(col: u8) -> char {
    COLS_TO_FILES[col as usize]
}

pub fn rank_to_row(rank: char) -> Option<u8> {
    ROWS_TO_RANKS
        .iter()
        .position(|r| *r == rank)
        .map(|row| row as u8)
}

pub fn file_to_col(file: char) -> Option<u8> {
    COLS_TO_FILES
        .iter()
        .position(|f| *f == file.to_ascii_lowercase())
        .map(|col| col as u8)
}

/// Convert coordinate notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    };

    let col = file_to_col(file).ok_or_else(|| ChessError::InvalidSquare(square.to_owned()))?;
    let row = rank_to_row(rank).ok_or_else(|| ChessError::InvalidSquare(square.to_owned()))?;
    Ok(Square::new(row, col))
}

/// Convert a square to coordinate notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let mut out = String::with_capacity(2);
    out.push(col_to_file(square.col));
    out.push(row_to_rank(square.row));
    out
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::Square;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), Square::new(0, 0));
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), Square::new(7, 7));
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse"), Square::new(4, 4));
        assert_eq!(square_to_algebraic(Square::new(0, 0)), "a8");
        assert_eq!(square_to_algebraic(Square::new(7, 7)), "h1");
        assert_eq!(square_to_algebraic(Square::new(6, 4)), "e2");
    }

    #[test]
    fn rejects_malformed_squares() {
        for bad in ["", "e", "e9", "i1", "e44", "4e"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessError::InvalidSquare(bad.to_owned()))
            );
        }
    }
}
