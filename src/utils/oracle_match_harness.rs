//! Head-to-head oracle match harness for local testing.
//!
//! Runs two `MoveOracle` implementations against each other through the rules
//! engine, with an optional seeded random opening prefix. Every oracle answer
//! is checked against the legal move set before it is played.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::{GameState, GameStatus};
use crate::oracle::oracle_trait::MoveOracle;
use crate::oracle::suggestion::request_suggestion;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawFiftyMoveRule,
    DrawMaxPlies,
    /// The side to move had legal moves but its oracle declined to name one.
    Resigned(Color),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_min_plies: 2,
            opening_max_plies: 8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves_lan: Vec<String>,
    pub played_moves_lan: Vec<String>,
    pub info_lines: Vec<String>,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchResult {
    pub fn report(&self) -> String {
        format!(
            "outcome={:?} plies={} fen=\"{}\" white_ms={:.3} black_ms={:.3}",
            self.outcome,
            self.final_state.ply_count(),
            self.final_state.get_fen(),
            self.white_total_time_ns as f64 / 1_000_000.0,
            self.black_total_time_ns as f64 / 1_000_000.0
        )
    }
}

/// Play one seeded match from the standard starting position.
pub fn play_oracle_match(
    white: &mut dyn MoveOracle,
    black: &mut dyn MoveOracle,
    seed: u64,
    config: MatchConfig,
) -> ChessResult<MatchResult> {
    play_oracle_match_from_state(GameState::new_game(), white, black, seed, config)
}

pub fn play_oracle_match_from_state(
    mut state: GameState,
    white: &mut dyn MoveOracle,
    black: &mut dyn MoveOracle,
    seed: u64,
    config: MatchConfig,
) -> ChessResult<MatchResult> {
    white.new_game()?;
    black.new_game()?;

    let opening_moves_lan = apply_seeded_random_opening(
        &mut state,
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    );

    let mut played_moves_lan = Vec::<String>::new();
    let mut info_lines = Vec::<String>::new();
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    let mut outcome = MatchOutcome::DrawMaxPlies;
    for _ in 0..config.max_plies {
        match state.check_for_mate() {
            GameStatus::Checkmate {
                winner: Color::White,
            } => {
                outcome = MatchOutcome::WhiteWinCheckmate;
                break;
            }
            GameStatus::Checkmate {
                winner: Color::Black,
            } => {
                outcome = MatchOutcome::BlackWinCheckmate;
                break;
            }
            GameStatus::Stalemate => {
                outcome = MatchOutcome::DrawStalemate;
                break;
            }
            GameStatus::Ongoing => {}
        }
        if state.halfmove_clock() >= 100 {
            outcome = MatchOutcome::DrawFiftyMoveRule;
            break;
        }

        let mover = state.side_to_move();
        let oracle: &mut dyn MoveOracle = match mover {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };

        let started = Instant::now();
        let suggestion = request_suggestion(oracle, &mut state).map_err(|e| match e {
            ChessError::IllegalMove(text) => {
                ChessError::IllegalMove(format!("{} oracle suggested {text}", oracle.name()))
            }
            other => other,
        })?;
        let elapsed_ns = started.elapsed().as_nanos();
        match mover {
            Color::White => white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns),
            Color::Black => black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns),
        }

        let Some(suggestion) = suggestion else {
            outcome = MatchOutcome::Resigned(mover);
            break;
        };

        info_lines.extend(suggestion.info_lines);
        played_moves_lan.push(move_to_long_algebraic(&suggestion.mv, suggestion.promotion));
        state.apply_with_promotion(&suggestion.mv, suggestion.promotion);
    }

    Ok(MatchResult {
        outcome,
        final_state: state,
        opening_moves_lan,
        played_moves_lan,
        info_lines,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Play between `min_plies` and `max_plies` uniformly random legal plies.
///
/// Stops early if the side to move has no legal move.
fn apply_seeded_random_opening(
    state: &mut GameState,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let plies = if max_plies <= min_plies {
        min_plies
    } else {
        rng.random_range(min_plies..=max_plies)
    };

    let mut opening = Vec::with_capacity(usize::from(plies));
    for _ in 0..plies {
        let legal = state.legal_moves();
        if legal.is_empty() {
            break;
        }
        let mv = legal[rng.random_range(0..legal.len())];
        opening.push(move_to_long_algebraic(&mv, Default::default()));
        state.apply(&mv);
    }
    opening
}
