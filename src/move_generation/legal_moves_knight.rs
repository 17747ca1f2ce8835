use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::CheckAnalysis;
use crate::moves::chess_move::Move;
use crate::moves::piece_offsets::KNIGHT_OFFSETS;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    analysis: &CheckAnalysis,
    out: &mut Vec<Move>,
) {
    // A knight never stays on the line it is pinned along.
    if analysis.pin_on(from).is_some() {
        return;
    }

    let board = game_state.board();
    let side = game_state.side_to_move();
    for offset in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(offset.0, offset.1) {
            if board.color_at(to) != Some(side) {
                out.push(Move::new(from, to, board));
            }
        }
    }
}
