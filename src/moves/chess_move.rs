//! Single-ply move value.
//!
//! A `Move` copies the moved and captured pieces out of the board when it is
//! built, so later board mutation never changes it. Equality and hashing use
//! only the origin/destination coordinates: two independently built moves
//! between the same squares are the same move.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: Option<Piece>,
    piece_captured: Option<Piece>,
    is_en_passant: bool,
    is_promotion: bool,
    is_castling: bool,
}

impl Move {
    /// Build a move from whatever currently occupies `start` and `end`.
    ///
    /// Never fails, even for squares that do not form a legal move. The
    /// promotion flag is derived from the moved piece and destination rank.
    pub fn new(start: Square, end: Square, board: &Board) -> Self {
        let piece_moved = board.get(start);
        let is_promotion = matches!(
            piece_moved,
            Some(Piece { kind: PieceKind::Pawn, color }) if end.row == color.promotion_row()
        );
        Self {
            start,
            end,
            piece_moved,
            piece_captured: board.get(end),
            is_en_passant: false,
            is_promotion,
            is_castling: false,
        }
    }

    /// En passant capture: the captured pawn sits beside the origin, on the
    /// destination's file, not on the (empty) destination square.
    pub fn en_passant(start: Square, end: Square, board: &Board) -> Self {
        Self {
            piece_captured: board.get(Self::en_passant_victim(start, end)),
            is_en_passant: true,
            ..Self::new(start, end, board)
        }
    }

    pub fn castling(start: Square, end: Square, board: &Board) -> Self {
        Self {
            is_castling: true,
            ..Self::new(start, end, board)
        }
    }

    #[inline]
    fn en_passant_victim(start: Square, end: Square) -> Square {
        Square::new(start.row, end.col)
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Square {
        self.end
    }

    #[inline]
    pub fn piece_moved(&self) -> Option<Piece> {
        self.piece_moved
    }

    #[inline]
    pub fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.is_promotion
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        self.is_castling
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Square the captured piece is removed from. Differs from `end()` only for en passant.
    #[inline]
    pub fn capture_square(&self) -> Square {
        if self.is_en_passant {
            Self::en_passant_victim(self.start, self.end)
        } else {
            self.end
        }
    }

    #[inline]
    pub fn moved_kind(&self) -> Option<PieceKind> {
        self.piece_moved.map(|piece| piece.kind)
    }

    /// Canonical identity: `start_row*1000 + start_col*100 + end_row*10 + end_col`.
    #[inline]
    pub fn id(&self) -> u16 {
        self.start.row as u16 * 1000
            + self.start.col as u16 * 100
            + self.end.row as u16 * 10
            + self.end.col as u16
    }

    /// Origin then destination in coordinate notation, e.g. `e2e4`.
    pub fn notation(&self) -> String {
        let mut out = square_to_algebraic(self.start);
        out.push_str(&square_to_algebraic(self.end));
        out
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}
