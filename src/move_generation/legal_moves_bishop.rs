use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::CheckAnalysis;
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::chess_move::Move;
use crate::moves::piece_offsets::DIAGONAL_DIRECTIONS;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: Square,
    analysis: &CheckAnalysis,
    out: &mut Vec<Move>,
) {
    push_ray_moves(game_state, from, &DIAGONAL_DIRECTIONS, analysis, out);
}
