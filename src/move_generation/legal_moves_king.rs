use crate::game_state::board::Board;
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_square_attacked, king_is_safe_on, CheckAnalysis};
use crate::moves::chess_move::Move;
use crate::moves::piece_offsets::KING_OFFSETS;

/// King steps are the only moves checked for safety one by one: the pin
/// model says nothing about the king itself.
pub fn generate_king_moves(
    game_state: &GameState,
    from: Square,
    analysis: &CheckAnalysis,
    out: &mut Vec<Move>,
) {
    let board = game_state.board();
    let side = game_state.side_to_move();

    for offset in KING_OFFSETS {
        let Some(to) = from.offset(offset.0, offset.1) else {
            continue;
        };
        if board.color_at(to) == Some(side) {
            continue;
        }
        if king_is_safe_on(board, side, to) {
            out.push(Move::new(from, to, board));
        }
    }

    generate_castling_moves(game_state, from, analysis, out);
}

fn generate_castling_moves(
    game_state: &GameState,
    king_from: Square,
    analysis: &CheckAnalysis,
    out: &mut Vec<Move>,
) {
    // Cannot castle out of check.
    if analysis.in_check {
        return;
    }

    let board = game_state.board();
    let side = game_state.side_to_move();
    let row = side.home_row();
    if king_from != Square::new(row, KING_HOME_COL) {
        return;
    }

    let rights = game_state.castling_rights();
    if rights.kingside(side)
        && castling_path_is_clear(
            board,
            side,
            KINGSIDE_ROOK_COL,
            &KINGSIDE_EMPTY_COLS,
            &KINGSIDE_TRANSIT_COLS,
        )
    {
        let to = Square::new(row, KINGSIDE_CASTLE_KING_COL);
        out.push(Move::castling(king_from, to, board));
    }
    if rights.queenside(side)
        && castling_path_is_clear(
            board,
            side,
            QUEENSIDE_ROOK_COL,
            &QUEENSIDE_EMPTY_COLS,
            &QUEENSIDE_TRANSIT_COLS,
        )
    {
        let to = Square::new(row, QUEENSIDE_CASTLE_KING_COL);
        out.push(Move::castling(king_from, to, board));
    }
}

fn castling_path_is_clear(
    board: &Board,
    side: Color,
    rook_col: u8,
    empty_cols: &[u8],
    transit_cols: &[u8],
) -> bool {
    let row = side.home_row();
    let rook_home = board.get(Square::new(row, rook_col)) == Some(Piece::new(side, PieceKind::Rook));

    rook_home
        && empty_cols
            .iter()
            .all(|col| board.is_empty(Square::new(row, *col)))
        && transit_cols
            .iter()
            .all(|col| !is_square_attacked(board, Square::new(row, *col), side.opposite()))
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_checks::analyze_king_safety;
    use crate::moves::chess_move::Move;

    fn king_moves(fen: &str) -> Vec<Move> {
        let game = GameState::from_fen(fen).expect("test FEN should parse");
        let side = game.side_to_move();
        let king = game.king_square(side);
        let analysis = analyze_king_safety(game.board(), side, king);
        let mut out = Vec::new();
        generate_king_moves(&game, king, &analysis, &mut out);
        out
    }

    fn names(moves: &[Move]) -> Vec<String> {
        let mut names: Vec<String> = moves.iter().map(Move::notation).collect();
        names.sort();
        names
    }

    #[test]
    fn king_avoids_attacked_squares() {
        let moves = king_moves("4k3/8/8/8/8/8/r7/4K3 w - - 0 1");
        assert_eq!(names(&moves), vec!["e1d1", "e1f1"]);
    }

    #[test]
    fn king_cannot_retreat_along_the_checking_ray() {
        let moves = king_moves("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
        assert_eq!(names(&moves), vec!["e1d2", "e1e2", "e1f2"]);
    }

    #[test]
    fn king_cannot_capture_a_defended_piece() {
        let moves = king_moves("4k3/8/8/8/8/8/3q4/3rK3 w - - 0 1");
        assert!(moves.is_empty());
    }

    #[test]
    fn kings_never_stand_next_to_each_other() {
        let moves = king_moves("8/8/8/8/8/4k3/8/4K3 w - - 0 1");
        assert_eq!(names(&moves), vec!["e1d1", "e1f1"]);
    }

    #[test]
    fn both_castles_available_on_a_clear_back_rank() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let castles: Vec<String> = names(&moves.into_iter().filter(Move::is_castling).collect::<Vec<_>>());
        assert_eq!(castles, vec!["e1c1", "e1g1"]);
    }

    #[test]
    fn castling_refused_while_in_check() {
        let moves = king_moves("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert!(moves.iter().all(|m| !m.is_castling()));
    }

    #[test]
    fn castling_refused_through_an_attacked_square() {
        let moves = king_moves("3r2k1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        let castles: Vec<String> = names(&moves.into_iter().filter(Move::is_castling).collect::<Vec<_>>());
        assert_eq!(castles, vec!["e1g1"]);
    }

    #[test]
    fn queenside_needs_the_knight_square_empty_but_not_safe() {
        let blocked = king_moves("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1");
        assert!(blocked.iter().all(|m| !m.is_castling()));

        let attacked_b1 = king_moves("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert_eq!(attacked_b1.iter().filter(|m| m.is_castling()).count(), 1);
    }

    #[test]
    fn castling_needs_the_right_and_the_rook() {
        assert!(king_moves("4k3/8/8/8/8/8/8/R3K2R w - - 0 1")
            .iter()
            .all(|m| !m.is_castling()));
        assert!(king_moves("4k3/8/8/8/8/8/8/4K3 w KQ - 0 1")
            .iter()
            .all(|m| !m.is_castling()));
    }
}
