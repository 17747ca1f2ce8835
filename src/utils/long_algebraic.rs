//! Coordinate move text (`e2e4`, `e7e8q`) as spoken by UCI engines.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;
use crate::moves::promotion_choice::PromotionChoice;
use crate::utils::algebraic::algebraic_to_square;

/// `mv` as coordinate text, with the promotion letter appended for promotions.
pub fn move_to_long_algebraic(mv: &Move, promotion: PromotionChoice) -> String {
    let mut out = mv.notation();
    if mv.is_promotion() {
        out.push(promotion.to_char());
    }
    out
}

/// Split coordinate text into origin, destination and optional promotion letter.
///
/// Only the shape is checked here. An unknown promotion letter resolves to a queen.
pub fn parse_long_algebraic(text: &str) -> ChessResult<(Square, Square, Option<PromotionChoice>)> {
    let text = text.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidMoveNotation(text.to_owned()));
    }

    let invalid = |_| ChessError::InvalidMoveNotation(text.to_owned());
    let from = algebraic_to_square(&text[0..2]).map_err(invalid)?;
    let to = algebraic_to_square(&text[2..4]).map_err(invalid)?;
    let promotion = text[4..].chars().next().map(PromotionChoice::from_char);

    Ok((from, to, promotion))
}

/// Resolve coordinate text against the legal moves of `game_state`.
pub fn long_algebraic_to_move(
    text: &str,
    game_state: &mut GameState,
) -> ChessResult<(Move, PromotionChoice)> {
    let (from, to, promotion) = parse_long_algebraic(text)?;
    let mv = game_state
        .find_legal_move(from, to)
        .ok_or_else(|| ChessError::IllegalMove(text.trim().to_owned()))?;

    Ok((mv, promotion.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic, parse_long_algebraic};
    use crate::chess_errors::ChessError;
    use crate::game_state::game_state::GameState;
    use crate::moves::promotion_choice::PromotionChoice;

    #[test]
    fn parses_plain_and_promotion_moves() {
        let (from, to, promotion) = parse_long_algebraic("e2e4").expect("e2e4 should parse");
        assert_eq!((from.row, from.col, to.row, to.col), (6, 4, 4, 4));
        assert_eq!(promotion, None);

        let (_, _, promotion) = parse_long_algebraic("a7a8n").expect("a7a8n should parse");
        assert_eq!(promotion, Some(PromotionChoice::Knight));

        let (_, _, promotion) = parse_long_algebraic("a7a8x").expect("a7a8x should parse");
        assert_eq!(promotion, Some(PromotionChoice::Queen));
    }

    #[test]
    fn rejects_malformed_text() {
        for text in ["", "e2", "e2e", "e2e4qq", "i2e4", "e9e4", "e2-e4"] {
            assert!(
                matches!(
                    parse_long_algebraic(text),
                    Err(ChessError::InvalidMoveNotation(_))
                ),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn resolves_against_the_legal_set() {
        let mut game = GameState::new_game();
        let (mv, _) = long_algebraic_to_move("g1f3", &mut game).expect("g1f3 should resolve");
        assert_eq!(mv.notation(), "g1f3");

        assert_eq!(
            long_algebraic_to_move("e2e5", &mut game),
            Err(ChessError::IllegalMove("e2e5".to_owned()))
        );
    }

    #[test]
    fn promotion_letter_round_trips_through_text() {
        let mut game = GameState::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");
        let (mv, promotion) = long_algebraic_to_move("a7a8r", &mut game).expect("a7a8r should resolve");
        assert!(mv.is_promotion());
        assert_eq!(promotion, PromotionChoice::Rook);
        assert_eq!(move_to_long_algebraic(&mv, promotion), "a7a8r");
    }
}
