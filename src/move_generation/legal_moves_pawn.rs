use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_square_attacked, CheckAnalysis};
use crate::move_generation::legal_move_shared::is_step_allowed;
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    analysis: &CheckAnalysis,
    out: &mut Vec<Move>,
) {
    let board = game_state.board();
    let side = game_state.side_to_move();
    let forward = side.pawn_direction();

    if is_step_allowed(analysis, from, (forward, 0)) {
        if let Some(one) = from.offset(forward, 0).filter(|sq| board.is_empty(*sq)) {
            out.push(Move::new(from, one, board));

            if from.row == side.pawn_start_row() {
                if let Some(two) = one.offset(forward, 0).filter(|sq| board.is_empty(*sq)) {
                    out.push(Move::new(from, two, board));
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        if !is_step_allowed(analysis, from, (forward, d_col)) {
            continue;
        }
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };

        match board.color_at(to) {
            Some(color) if color != side => out.push(Move::new(from, to, board)),
            None if game_state.en_passant_target() == Some(to) => {
                let mv = Move::en_passant(from, to, board);
                if en_passant_keeps_king_safe(game_state, &mv) {
                    out.push(mv);
                }
            }
            _ => {}
        }
    }
}

/// En passant removes two pawns from one rank, which the single-pin model
/// cannot see, so the resulting board is probed directly.
fn en_passant_keeps_king_safe(game_state: &GameState, mv: &Move) -> bool {
    let side = game_state.side_to_move();
    let victim_ok = mv
        .piece_captured()
        .is_some_and(|piece| piece.is(side.opposite(), PieceKind::Pawn));
    if !victim_ok {
        return false;
    }

    let mut after = *game_state.board();
    let pawn = after.take(mv.start());
    after.set(mv.capture_square(), None);
    after.set(mv.end(), pawn);
    !is_square_attacked(&after, game_state.king_square(side), side.opposite())
}
