use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Single undo record for `apply` / `undo`.
///
/// Castling rights are not stored here; the castling tracker keeps its own
/// snapshot per applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    /// Piece written to the destination: the mover, or its promoted form.
    pub placed_piece: Piece,
    pub prev_en_passant_target: Option<Square>,
}

impl UndoState {
    #[inline]
    pub fn promoted_kind(&self) -> Option<PieceKind> {
        self.mv.is_promotion().then_some(self.placed_piece.kind)
    }

    #[inline]
    pub fn resets_halfmove_clock(&self) -> bool {
        self.mv.is_capture() || self.mv.moved_kind() == Some(PieceKind::Pawn)
    }
}
