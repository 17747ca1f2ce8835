//! Castling rights and the snapshot log used to restore them on undo.

use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const fn all() -> Self {
        Self {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    #[inline]
    pub fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    #[inline]
    pub fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    pub fn revoke_both(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            Color::Black => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
        }
    }

    /// Drop the right tied to the rook corner at `square`, if it is one.
    pub fn revoke_corner(&mut self, square: Square) {
        let color = match square.row {
            r if r == Color::White.home_row() => Color::White,
            r if r == Color::Black.home_row() => Color::Black,
            _ => return,
        };
        match (color, square.col) {
            (Color::White, KINGSIDE_ROOK_COL) => self.white_kingside = false,
            (Color::White, QUEENSIDE_ROOK_COL) => self.white_queenside = false,
            (Color::Black, KINGSIDE_ROOK_COL) => self.black_kingside = false,
            (Color::Black, QUEENSIDE_ROOK_COL) => self.black_queenside = false,
            _ => {}
        }
    }

    /// Rights remaining after `mv` is played from a position holding `self`.
    pub fn after_move(mut self, mv: &Move) -> Self {
        if let Some(moved) = mv.piece_moved() {
            match moved.kind {
                PieceKind::King => self.revoke_both(moved.color),
                PieceKind::Rook if mv.start().row == moved.color.home_row() => {
                    self.revoke_corner(mv.start())
                }
                _ => {}
            }
        }

        if let Some(captured) = mv.piece_captured() {
            if captured.kind == PieceKind::Rook && mv.end().row == captured.color.home_row() {
                self.revoke_corner(mv.end());
            }
        }

        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::none()
    }
}

/// Current rights plus the snapshot taken before every applied move.
///
/// `depth()` always equals the number of moves played since construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastlingRightsTracker {
    current: CastlingRights,
    history: Vec<CastlingRights>,
}

impl CastlingRightsTracker {
    pub fn new(initial: CastlingRights) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn current(&self) -> CastlingRights {
        self.current
    }

    /// Record the pre-move rights and advance them past `mv`.
    pub fn record_move(&mut self, mv: &Move) {
        self.history.push(self.current);
        self.current = self.current.after_move(mv);
    }

    /// Restore the rights in force before the most recent `record_move`.
    pub fn restore(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.current = previous;
        }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

impl Default for CastlingRightsTracker {
    fn default() -> Self {
        Self::new(CastlingRights::all())
    }
}

#[cfg(test)]
mod tests {
    use super::{CastlingRights, CastlingRightsTracker};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::moves::chess_move::Move;

    #[test]
    fn king_move_drops_both_rights_for_that_side() {
        let mut board = Board::empty();
        board.set(Square::new(7, 4), Some(Piece::new(Color::White, PieceKind::King)));
        let mv = Move::new(Square::new(7, 4), Square::new(7, 5), &board);

        let after = CastlingRights::all().after_move(&mv);
        assert!(!after.white_kingside);
        assert!(!after.white_queenside);
        assert!(after.black_kingside);
        assert!(after.black_queenside);
    }

    #[test]
    fn rook_leaving_or_captured_on_corner_drops_one_right() {
        let mut board = Board::empty();
        board.set(Square::new(7, 0), Some(Piece::new(Color::White, PieceKind::Rook)));
        board.set(Square::new(0, 0), Some(Piece::new(Color::Black, PieceKind::Rook)));

        let rook_lift = Move::new(Square::new(7, 0), Square::new(5, 0), &board);
        let after = CastlingRights::all().after_move(&rook_lift);
        assert!(!after.white_queenside);
        assert!(after.white_kingside);

        let rook_trade = Move::new(Square::new(7, 0), Square::new(0, 0), &board);
        let after = CastlingRights::all().after_move(&rook_trade);
        assert!(!after.white_queenside);
        assert!(!after.black_queenside);
        assert!(after.black_kingside);
    }

    #[test]
    fn tracker_restores_snapshots_in_reverse_order() {
        let mut board = Board::empty();
        board.set(Square::new(7, 4), Some(Piece::new(Color::White, PieceKind::King)));
        board.set(Square::new(0, 7), Some(Piece::new(Color::Black, PieceKind::Rook)));

        let mut tracker = CastlingRightsTracker::default();
        tracker.record_move(&Move::new(Square::new(7, 4), Square::new(6, 4), &board));
        tracker.record_move(&Move::new(Square::new(0, 7), Square::new(2, 7), &board));
        assert_eq!(tracker.depth(), 2);
        assert!(!tracker.current().white_kingside);
        assert!(!tracker.current().black_kingside);

        tracker.restore();
        assert_eq!(tracker.depth(), 1);
        assert!(tracker.current().black_kingside);
        assert!(!tracker.current().white_queenside);

        tracker.restore();
        assert_eq!(tracker.current(), CastlingRights::all());
        assert_eq!(tracker.depth(), 0);

        tracker.restore();
        assert_eq!(tracker.current(), CastlingRights::all());
    }

    #[test]
    fn rights_are_empty_only_once_every_flag_is_gone() {
        let mut rights = CastlingRights::all();
        rights.revoke_both(Color::White);
        assert!(!rights.is_empty());
        rights.revoke_corner(Square::new(0, 0));
        assert!(!rights.is_empty());
        rights.revoke_corner(Square::new(0, 7));
        assert!(rights.is_empty());
        assert!(CastlingRights::none().is_empty());
    }
}
