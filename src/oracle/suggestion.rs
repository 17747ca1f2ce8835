//! Asking an oracle for a move in the current position.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::moves::promotion_choice::PromotionChoice;
use crate::oracle::oracle_trait::MoveOracle;
use crate::utils::long_algebraic::long_algebraic_to_move;

/// An oracle answer resolved to one of the position's legal moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub mv: Move,
    pub promotion: PromotionChoice,
    pub info_lines: Vec<String>,
}

/// Export `game_state`, ask `oracle`, and match its answer against the legal moves.
///
/// `Ok(None)` when the oracle declines to name a move. An answer that does not
/// parse or is not legal here is an error rather than a silent no-op.
pub fn request_suggestion(
    oracle: &mut dyn MoveOracle,
    game_state: &mut GameState,
) -> ChessResult<Option<Suggestion>> {
    let output = oracle.suggest_move(&game_state.get_fen())?;

    let Some(text) = output.suggestion else {
        return Ok(None);
    };
    if is_null_move(&text) {
        return Ok(None);
    }

    let (mv, promotion) = long_algebraic_to_move(&text, game_state)?;
    Ok(Some(Suggestion {
        mv,
        promotion,
        info_lines: output.info_lines,
    }))
}

/// UCI spells "no move" as `0000` or `(none)`.
pub fn is_null_move(text: &str) -> bool {
    matches!(text.trim(), "0000" | "(none)" | "")
}

#[cfg(test)]
mod tests {
    use super::request_suggestion;
    use crate::chess_errors::ChessError;
    use crate::game_state::game_state::GameState;
    use crate::moves::promotion_choice::PromotionChoice;
    use crate::oracle::oracle_trait::test_doubles::ScriptedOracle;

    #[test]
    fn legal_answer_resolves_to_a_move() {
        let mut oracle = ScriptedOracle::new(vec![Ok(Some("e2e4".to_owned()))]);
        let mut game = GameState::new_game();

        let suggestion = request_suggestion(&mut oracle, &mut game)
            .expect("oracle call should succeed")
            .expect("oracle should name a move");

        assert_eq!(suggestion.mv.notation(), "e2e4");
        assert_eq!(suggestion.info_lines, vec!["info string scripted answer"]);
        assert_eq!(oracle.seen_fens, vec![game.get_fen()]);
    }

    #[test]
    fn promotion_letter_is_carried_through() {
        let mut oracle = ScriptedOracle::new(vec![Ok(Some("a7a8n".to_owned()))]);
        let mut game = GameState::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");

        let suggestion = request_suggestion(&mut oracle, &mut game)
            .expect("oracle call should succeed")
            .expect("oracle should name a move");
        assert_eq!(suggestion.promotion, PromotionChoice::Knight);
    }

    #[test]
    fn no_move_answers_are_none() {
        let mut oracle = ScriptedOracle::new(vec![Ok(None), Ok(Some("0000".to_owned()))]);
        let mut game = GameState::new_game();

        assert_eq!(request_suggestion(&mut oracle, &mut game), Ok(None));
        assert_eq!(request_suggestion(&mut oracle, &mut game), Ok(None));
    }

    #[test]
    fn bad_answers_and_oracle_failures_are_errors() {
        let mut oracle = ScriptedOracle::new(vec![
            Ok(Some("e2e5".to_owned())),
            Ok(Some("zz".to_owned())),
            Err(ChessError::Oracle("engine crashed".to_owned())),
        ]);
        let mut game = GameState::new_game();

        assert!(matches!(
            request_suggestion(&mut oracle, &mut game),
            Err(ChessError::IllegalMove(_))
        ));
        assert!(matches!(
            request_suggestion(&mut oracle, &mut game),
            Err(ChessError::InvalidMoveNotation(_))
        ));
        assert!(matches!(
            request_suggestion(&mut oracle, &mut game),
            Err(ChessError::Oracle(_))
        ));
    }
}
