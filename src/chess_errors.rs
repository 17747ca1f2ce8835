//! Errors returned at the crate's text and process boundaries.
//!
//! The rules core (move construction, legal-move generation, apply, undo)
//! never fails. `ChessError` covers the fallible edges around it: parsing
//! FEN and coordinate notation, and talking to an external move oracle.

use std::error::Error;
use std::fmt;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A square name outside `a1..h8`.
    InvalidSquare(String),
    /// A FEN string that could not be turned into a position.
    InvalidFen(String),
    /// Coordinate move text that is not `<from><to>[promotion]`.
    InvalidMoveNotation(String),
    /// Well-formed move text naming a move that is not legal in the position.
    IllegalMove(String),
    /// The external oracle failed to start, answer, or speak its protocol.
    Oracle(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidSquare(square) => write!(f, "invalid square: {square:?}"),
            ChessError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessError::InvalidMoveNotation(text) => write!(f, "invalid move notation: {text:?}"),
            ChessError::IllegalMove(text) => write!(f, "illegal move in this position: {text}"),
            ChessError::Oracle(msg) => write!(f, "move oracle error: {msg}"),
        }
    }
}

impl Error for ChessError {}

#[cfg(test)]
mod tests {
    use super::ChessError;

    #[test]
    fn display_names_the_failing_input() {
        assert_eq!(
            ChessError::InvalidSquare("z9".to_owned()).to_string(),
            "invalid square: \"z9\""
        );
        assert_eq!(
            ChessError::IllegalMove("e2e5".to_owned()).to_string(),
            "illegal move in this position: e2e5"
        );
    }
}
