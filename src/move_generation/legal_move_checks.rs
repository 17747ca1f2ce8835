//! Check, pin and attack inspection around a king.
//!
//! `analyze_king_safety` walks the eight rays and the eight knight offsets
//! out of a king square and classifies what it finds. `is_square_attacked`
//! is the pin-free probe used for castling paths. Both share the per-ray
//! attack rule in `attacks_along_ray`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::piece_offsets::{is_orthogonal, reverse, Direction, KNIGHT_OFFSETS, RAY_DIRECTIONS};

/// An own piece that shields its king from an enemy slider.
///
/// `direction` points from the king through the pinned piece toward the pinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    pub direction: Direction,
}

impl Pin {
    /// Whether moving the pinned piece one step along `step` keeps it on the pin line.
    #[inline]
    pub fn allows(&self, step: Direction) -> bool {
        step == self.direction || step == reverse(self.direction)
    }
}

/// A piece giving check.
///
/// For ray attackers `direction` is the ray from the king toward the attacker.
/// For a knight it is the knight offset, which has no squares in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub attacker: Square,
    pub direction: Direction,
    pub attacker_kind: PieceKind,
}

impl Check {
    /// Destinations that answer this check for any piece other than the king:
    /// the attacker's square plus, for ray checks, every square between it and the king.
    pub fn response_squares(&self, king: Square) -> Vec<Square> {
        if self.attacker_kind == PieceKind::Knight {
            return vec![self.attacker];
        }

        let mut out = Vec::with_capacity(7);
        let mut cursor = king;
        while let Some(next) = cursor.offset(self.direction.0, self.direction.1) {
            out.push(next);
            if next == self.attacker {
                break;
            }
            cursor = next;
        }
        out
    }
}

/// Check and pin state of one side's king in the current position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckAnalysis {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

impl CheckAnalysis {
    pub fn pin_on(&self, square: Square) -> Option<&Pin> {
        self.pins.iter().find(|pin| pin.square == square)
    }

    #[inline]
    pub fn is_double_check(&self) -> bool {
        self.checks.len() >= 2
    }
}

/// Whether `attacker`, first piece met `distance` steps along `direction`
/// from some target square, attacks that target.
#[inline]
pub fn attacks_along_ray(attacker: Piece, direction: Direction, distance: u8) -> bool {
    match attacker.kind {
        PieceKind::Rook => is_orthogonal(direction),
        PieceKind::Bishop => !is_orthogonal(direction),
        PieceKind::Queen => true,
        PieceKind::King => distance == 1,
        // The pawn captures toward the target, i.e. against the ray.
        PieceKind::Pawn => {
            distance == 1
                && direction.1 != 0
                && direction.0 == -attacker.color.pawn_direction()
        }
        PieceKind::Knight => false,
    }
}

/// Inspect `color`'s king as if it stood on `king`.
///
/// The board is not modified. The real king of `color` is transparent to the
/// ray walk, so a hypothetical square still sees attacks that pass through
/// the king's current square.
pub fn analyze_king_safety(board: &Board, color: Color, king: Square) -> CheckAnalysis {
    let mut analysis = CheckAnalysis::default();

    for direction in RAY_DIRECTIONS {
        let mut candidate_pin: Option<Square> = None;
        let mut cursor = king;
        let mut distance = 0u8;

        while let Some(next) = cursor.offset(direction.0, direction.1) {
            cursor = next;
            distance += 1;

            let Some(piece) = board.get(next) else {
                continue;
            };

            if piece.color == color {
                if piece.kind == PieceKind::King {
                    continue;
                }
                if candidate_pin.is_some() {
                    break;
                }
                candidate_pin = Some(next);
                continue;
            }

            if attacks_along_ray(piece, direction, distance) {
                match candidate_pin {
                    Some(square) => analysis.pins.push(Pin { square, direction }),
                    None => analysis.checks.push(Check {
                        attacker: next,
                        direction,
                        attacker_kind: piece.kind,
                    }),
                }
            }
            break;
        }
    }

    let enemy_knight = Piece::new(color.opposite(), PieceKind::Knight);
    for offset in KNIGHT_OFFSETS {
        if let Some(square) = king.offset(offset.0, offset.1) {
            if board.get(square) == Some(enemy_knight) {
                analysis.checks.push(Check {
                    attacker: square,
                    direction: offset,
                    attacker_kind: PieceKind::Knight,
                });
            }
        }
    }

    analysis.in_check = !analysis.checks.is_empty();
    analysis
}

/// Pure "what if the king stood here" probe.
#[inline]
pub fn king_is_safe_on(board: &Board, color: Color, square: Square) -> bool {
    !analyze_king_safety(board, color, square).in_check
}

/// Whether any piece of `attacker` attacks `square`. Pins are irrelevant here.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    for direction in RAY_DIRECTIONS {
        let mut cursor = square;
        let mut distance = 0u8;
        while let Some(next) = cursor.offset(direction.0, direction.1) {
            cursor = next;
            distance += 1;
            if let Some(piece) = board.get(next) {
                if piece.color == attacker && attacks_along_ray(piece, direction, distance) {
                    return true;
                }
                break;
            }
        }
    }

    let knight = Piece::new(attacker, PieceKind::Knight);
    KNIGHT_OFFSETS.iter().any(|offset| {
        square
            .offset(offset.0, offset.1)
            .is_some_and(|from| board.get(from) == Some(knight))
    })
}
