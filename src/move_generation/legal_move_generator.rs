//! Full legal move generation pipeline.
//!
//! Every piece generator already respects pins and king safety, so the only
//! filtering left here is the answer to check: with one checker a non-king
//! move must capture it or block its ray, with two only the king may move.

use crate::game_state::game_state::GameState;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::CheckAnalysis;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Moves for one piece of the side to move standing on `from`.
pub fn generate_piece_moves(
    game_state: &GameState,
    from: Square,
    kind: PieceKind,
    analysis: &CheckAnalysis,
    out: &mut Vec<Move>,
) {
    match kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, analysis, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, analysis, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, analysis, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, analysis, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, analysis, out),
        PieceKind::King => generate_king_moves(game_state, from, analysis, out),
    }
}

/// Pin-aware moves for every piece of the side to move, ignoring any check.
pub fn generate_pseudo_legal_moves(game_state: &GameState, analysis: &CheckAnalysis) -> Vec<Move> {
    let side = game_state.side_to_move();
    let mut out = Vec::<Move>::with_capacity(64);
    for (from, piece) in game_state.board().pieces_of(side) {
        generate_piece_moves(game_state, from, piece.kind, analysis, &mut out);
    }
    out
}

/// Legal moves for the side to move given the analysis of its king.
pub fn generate_legal_moves(game_state: &GameState, analysis: &CheckAnalysis) -> Vec<Move> {
    let mut moves = generate_pseudo_legal_moves(game_state, analysis);
    let king = game_state.king_square(game_state.side_to_move());

    match analysis.checks.as_slice() {
        [] => {}
        [check] => {
            let responses = check.response_squares(king);
            moves.retain(|mv| {
                mv.start() == king
                    || responses.contains(&mv.end())
                    || (mv.is_en_passant() && mv.capture_square() == check.attacker)
            });
        }
        _ => moves.retain(|mv| mv.start() == king),
    }

    moves
}
