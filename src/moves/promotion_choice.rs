//! Promotion piece selection supplied by the caller of `apply`.
//!
//! Anything that is not a queen, rook, bishop or knight resolves to a queen.

use crate::game_state::chess_types::PieceKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromotionChoice {
    #[default]
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionChoice {
    pub fn from_char(ch: char) -> Self {
        match ch.to_ascii_lowercase() {
            'r' => PromotionChoice::Rook,
            'b' => PromotionChoice::Bishop,
            'n' => PromotionChoice::Knight,
            _ => PromotionChoice::Queen,
        }
    }

    /// First character of `input` after trimming; empty input is a queen.
    pub fn from_input(input: &str) -> Self {
        input
            .trim()
            .chars()
            .next()
            .map(Self::from_char)
            .unwrap_or_default()
    }

    pub fn from_kind(kind: Option<PieceKind>) -> Self {
        match kind {
            Some(PieceKind::Rook) => PromotionChoice::Rook,
            Some(PieceKind::Bishop) => PromotionChoice::Bishop,
            Some(PieceKind::Knight) => PromotionChoice::Knight,
            _ => PromotionChoice::Queen,
        }
    }

    #[inline]
    pub const fn piece_kind(self) -> PieceKind {
        match self {
            PromotionChoice::Queen => PieceKind::Queen,
            PromotionChoice::Rook => PieceKind::Rook,
            PromotionChoice::Bishop => PieceKind::Bishop,
            PromotionChoice::Knight => PieceKind::Knight,
        }
    }

    #[inline]
    pub const fn to_char(self) -> char {
        self.piece_kind().fen_char()
    }
}

impl From<PieceKind> for PromotionChoice {
    fn from(kind: PieceKind) -> Self {
        Self::from_kind(Some(kind))
    }
}
