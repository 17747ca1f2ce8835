use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::CheckAnalysis;
use crate::moves::chess_move::Move;
use crate::moves::piece_offsets::Direction;

/// Whether the piece on `from` may step along `step` given the current pins.
#[inline]
pub fn is_step_allowed(analysis: &CheckAnalysis, from: Square, step: Direction) -> bool {
    analysis.pin_on(from).map_or(true, |pin| pin.allows(step))
}

/// Slide from `from` along each direction until blocked; an enemy blocker is
/// included as a capture, an own blocker is not.
pub fn push_ray_moves(
    game_state: &GameState,
    from: Square,
    directions: &[Direction],
    analysis: &CheckAnalysis,
    out: &mut Vec<Move>,
) {
    let board = game_state.board();
    let side = game_state.side_to_move();

    for &direction in directions {
        if !is_step_allowed(analysis, from, direction) {
            continue;
        }

        let mut cursor = from;
        while let Some(to) = cursor.offset(direction.0, direction.1) {
            match board.color_at(to) {
                None => out.push(Move::new(from, to, board)),
                Some(color) => {
                    if color != side {
                        out.push(Move::new(from, to, board));
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}
