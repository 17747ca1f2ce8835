//! Move-path enumeration for validating the generator.
//!
//! Walks the tree with `apply`/`undo` on a single `GameState`. Promotion
//! moves are expanded into all four choices so node counts match published
//! perft tables.

use std::panic;
use std::thread;

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::moves::promotion_choice::PromotionChoice;

const ALL_PROMOTIONS: [PromotionChoice; 4] = [
    PromotionChoice::Queen,
    PromotionChoice::Rook,
    PromotionChoice::Bishop,
    PromotionChoice::Knight,
];

/// Leaf tallies. Everything but `nodes` describes the move that reached the leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

#[inline]
fn promotion_choices(mv: &Move) -> &'static [PromotionChoice] {
    if mv.is_promotion() {
        &ALL_PROMOTIONS
    } else {
        &ALL_PROMOTIONS[..1]
    }
}

/// Count leaf positions `depth` plies below `game_state`.
///
/// The state is returned to where it started.
pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_recurse(game_state, depth, &mut counts);
    counts
}

/// Same counts as `perft`, with each root move searched on its own thread.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth <= 1 {
        return perft(&mut game_state.clone(), depth);
    }

    let root_moves = game_state.clone().legal_moves();
    let mut total = PerftCounts::default();

    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|mv| {
                let mut local_state = game_state.clone();
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    for &promotion in promotion_choices(mv) {
                        local_state.apply_with_promotion(mv, promotion);
                        perft_recurse(&mut local_state, depth - 1, &mut local);
                        local_state.undo();
                    }
                    local
                })
            })
            .collect();

        for handle in handles {
            let local = handle
                .join()
                .unwrap_or_else(|payload| panic::resume_unwind(payload));
            total.merge(local);
        }
    });

    total
}

fn perft_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    for mv in game_state.legal_moves() {
        for &promotion in promotion_choices(&mv) {
            game_state.apply_with_promotion(&mv, promotion);
            if depth == 1 {
                tally_leaf(game_state, &mv, counts);
            } else {
                perft_recurse(game_state, depth - 1, counts);
            }
            game_state.undo();
        }
    }
}

fn tally_leaf(game_state: &mut GameState, mv: &Move, counts: &mut PerftCounts) {
    counts.nodes += 1;

    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_en_passant() {
        counts.en_passant += 1;
    }
    if mv.is_castling() {
        counts.castles += 1;
    }
    if mv.is_promotion() {
        counts.promotions += 1;
    }

    if game_state.in_check() {
        counts.checks += 1;
        if game_state.legal_moves().is_empty() {
            counts.checkmates += 1;
        }
    }
}
