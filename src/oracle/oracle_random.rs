//! Uniform random legal-move oracle.
//!
//! Stands in for a real engine in demos and tests. With a seed it is fully
//! reproducible; without one it draws from the thread-local generator.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::promotion_choice::PromotionChoice;
use crate::oracle::oracle_trait::{MoveOracle, OracleOutput};
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Default)]
pub struct RandomOracle {
    seeded: Option<StdRng>,
}

impl RandomOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seeded: Some(StdRng::seed_from_u64(seed)),
        }
    }
}

impl MoveOracle for RandomOracle {
    fn name(&self) -> &str {
        "random"
    }

    fn suggest_move(&mut self, fen: &str) -> ChessResult<OracleOutput> {
        let mut game_state = GameState::from_fen(fen)?;
        let legal_moves = game_state.legal_moves();

        let mut out = OracleOutput::none();
        out.info_lines.push(format!(
            "info string random_oracle legal_moves {}",
            legal_moves.len()
        ));

        let picked = match self.seeded.as_mut() {
            Some(rng) => legal_moves.choose(rng),
            None => legal_moves.choose(&mut rand::rng()),
        };

        out.suggestion = picked.map(|mv| move_to_long_algebraic(mv, PromotionChoice::Queen));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomOracle;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::game_state::GameState;
    use crate::oracle::oracle_trait::MoveOracle;
    use crate::oracle::suggestion::request_suggestion;

    #[test]
    fn same_seed_same_answers() {
        let mut a = RandomOracle::with_seed(7);
        let mut b = RandomOracle::with_seed(7);
        for _ in 0..5 {
            assert_eq!(
                a.suggest_move(STARTING_POSITION_FEN).expect("oracle should answer"),
                b.suggest_move(STARTING_POSITION_FEN).expect("oracle should answer")
            );
        }
    }

    #[test]
    fn answers_are_always_legal() {
        let mut oracle = RandomOracle::new();
        let mut game = GameState::new_game();
        for _ in 0..20 {
            let suggestion = request_suggestion(&mut oracle, &mut game)
                .expect("random answers are legal")
                .expect("start position has moves");
            assert!(game.legal_moves().contains(&suggestion.mv));
        }
    }

    #[test]
    fn mated_side_gets_no_suggestion() {
        let mut oracle = RandomOracle::with_seed(1);
        let out = oracle
            .suggest_move("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("oracle should answer");
        assert_eq!(out.suggestion, None);
    }
}
