//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position FEN and the castling geometry shared by move generation
//! and move application.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Column of both kings before they move.
pub const KING_HOME_COL: u8 = 4;

pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// King destination columns for castling.
pub const KINGSIDE_CASTLE_KING_COL: u8 = 6;
pub const QUEENSIDE_CASTLE_KING_COL: u8 = 2;

/// Rook destination columns for castling (adjacent to the king's new square).
pub const KINGSIDE_CASTLE_ROOK_COL: u8 = 5;
pub const QUEENSIDE_CASTLE_ROOK_COL: u8 = 3;

/// Squares that must be empty between king and rook.
pub const KINGSIDE_EMPTY_COLS: [u8; 2] = [5, 6];
pub const QUEENSIDE_EMPTY_COLS: [u8; 3] = [3, 2, 1];

/// Squares the king crosses or lands on; none may be attacked.
pub const KINGSIDE_TRANSIT_COLS: [u8; 2] = [5, 6];
pub const QUEENSIDE_TRANSIT_COLS: [u8; 2] = [3, 2];
