//! Game coordinator.
//!
//! `GameState` owns the board and everything needed to play and take back
//! moves: side to move, king squares, castling rights, the en passant target
//! and the undo stack. Legal moves are produced from a cached check analysis
//! that every `apply`/`undo` invalidates.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::castling_rights::{CastlingRights, CastlingRightsTracker};
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{analyze_king_safety, CheckAnalysis};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::Move;
use crate::moves::promotion_choice::PromotionChoice;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Outcome of `GameState::check_for_mate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    // [color]
    king_squares: [Square; 2],
    castling: CastlingRightsTracker,
    en_passant_target: Option<Square>,
    undo_stack: Vec<UndoState>,

    // Cleared by every apply/undo.
    analysis: Option<CheckAnalysis>,
    checkmate: bool,
    stalemate: bool,

    // Counters as they stood when the position was set up.
    initial_side_to_move: Color,
    initial_halfmove_clock: u16,
    initial_fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Color::White,
            king_squares: [
                Square::new(Color::White.home_row(), KING_HOME_COL),
                Square::new(Color::Black.home_row(), KING_HOME_COL),
            ],
            castling: CastlingRightsTracker::new(CastlingRights::all()),
            en_passant_target: None,
            undo_stack: Vec::new(),
            analysis: None,
            checkmate: false,
            stalemate: false,
            initial_side_to_move: Color::White,
            initial_halfmove_clock: 0,
            initial_fullmove_number: 1,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Assemble a position from already-parsed parts.
    ///
    /// Each side must have exactly one king; nothing else about the position
    /// is checked.
    pub fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> ChessResult<Self> {
        let mut king_squares = [Square::new(0, 0); 2];
        for color in [Color::White, Color::Black] {
            let count = board.count(Piece::new(color, PieceKind::King));
            if count != 1 {
                return Err(ChessError::InvalidFen(format!(
                    "{color:?} must have exactly one king, found {count}"
                )));
            }
            king_squares[color.index()] = board
                .find_king(color)
                .ok_or_else(|| ChessError::InvalidFen(format!("{color:?} king missing")))?;
        }

        Ok(Self {
            board,
            side_to_move,
            king_squares,
            castling: CastlingRightsTracker::new(castling_rights),
            en_passant_target,
            undo_stack: Vec::new(),
            analysis: None,
            checkmate: false,
            stalemate: false,
            initial_side_to_move: side_to_move,
            initial_halfmove_clock: halfmove_clock,
            initial_fullmove_number: fullmove_number.max(1),
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling.current()
    }

    /// Number of rights snapshots held for undo; equals the number of moves played.
    #[inline]
    pub fn castling_history_depth(&self) -> usize {
        self.castling.depth()
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Moves played since construction, oldest first.
    pub fn move_history(&self) -> impl ExactSizeIterator<Item = Move> + '_ {
        self.undo_stack.iter().map(|undo| undo.mv)
    }

    #[inline]
    pub fn undo_history(&self) -> &[UndoState] {
        &self.undo_stack
    }

    #[inline]
    pub fn ply_count(&self) -> usize {
        self.undo_stack.len()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.undo_stack.last().map(|undo| undo.mv)
    }

    /// Plies since the last pawn move or capture.
    pub fn halfmove_clock(&self) -> u16 {
        let quiet = self
            .undo_stack
            .iter()
            .rev()
            .take_while(|undo| !undo.resets_halfmove_clock())
            .count() as u16;

        if quiet as usize == self.undo_stack.len() {
            self.initial_halfmove_clock.saturating_add(quiet)
        } else {
            quiet
        }
    }

    /// Starts at the set-up value and increments after each Black move.
    pub fn fullmove_number(&self) -> u16 {
        let black_first = u16::from(self.initial_side_to_move == Color::Black);
        let plies = self.undo_stack.len() as u16;
        self.initial_fullmove_number
            .saturating_add((plies + black_first) / 2)
    }

    /// Check and pin state of the side to move, computed on first use.
    pub fn check_analysis(&mut self) -> &CheckAnalysis {
        let side = self.side_to_move;
        let king = self.king_squares[side.index()];
        let board = &self.board;
        self.analysis
            .get_or_insert_with(|| analyze_king_safety(board, side, king))
    }

    pub fn in_check(&mut self) -> bool {
        self.check_analysis().in_check
    }

    pub fn legal_moves(&mut self) -> Vec<Move> {
        let analysis = self.check_analysis().clone();
        generate_legal_moves(self, &analysis)
    }

    /// The legal move from `start` to `end`, if there is one.
    pub fn find_legal_move(&mut self, start: Square, end: Square) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|mv| mv.start() == start && mv.end() == end)
    }

    /// Classify the position for the side to move and latch the terminal flags.
    pub fn check_for_mate(&mut self) -> GameStatus {
        let no_moves = self.legal_moves().is_empty();
        let in_check = self.in_check();
        self.checkmate = no_moves && in_check;
        self.stalemate = no_moves && !in_check;
        self.status()
    }

    /// Status as of the last `check_for_mate`; `Ongoing` if it has not run since the last move.
    pub fn status(&self) -> GameStatus {
        if self.checkmate {
            GameStatus::Checkmate {
                winner: self.side_to_move.opposite(),
            }
        } else if self.stalemate {
            GameStatus::Stalemate
        } else {
            GameStatus::Ongoing
        }
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// Play `mv`, promoting to a queen where it applies.
    pub fn apply(&mut self, mv: &Move) {
        self.apply_with_promotion(mv, PromotionChoice::default());
    }

    /// Play `mv`. `promotion` is only consulted for promotion moves.
    ///
    /// `mv` must come from this position's legal moves; a move whose origin
    /// is empty is ignored.
    pub fn apply_with_promotion(&mut self, mv: &Move, promotion: PromotionChoice) {
        let Some(mover) = self.board.get(mv.start()) else {
            debug_assert!(false, "apply called with empty origin {}", mv.notation());
            return;
        };

        let prev_en_passant_target = self.en_passant_target;
        self.castling.record_move(mv);

        self.board.set(mv.start(), None);
        if mv.is_en_passant() {
            self.board.set(mv.capture_square(), None);
        }

        let placed_piece = if mv.is_promotion() {
            Piece::new(mover.color, promotion.piece_kind())
        } else {
            mover
        };
        self.board.set(mv.end(), Some(placed_piece));

        if mv.is_castling() {
            let (rook_from, rook_to) = castling_rook_squares(mv);
            let rook = self.board.take(rook_from);
            self.board.set(rook_to, rook);
        }

        if mover.kind == PieceKind::King {
            self.king_squares[mover.color.index()] = mv.end();
        }

        self.en_passant_target = if mover.kind == PieceKind::Pawn
            && mv.start().row.abs_diff(mv.end().row) == 2
        {
            Some(Square::new((mv.start().row + mv.end().row) / 2, mv.start().col))
        } else {
            None
        };

        self.side_to_move = self.side_to_move.opposite();
        self.undo_stack.push(UndoState {
            mv: *mv,
            placed_piece,
            prev_en_passant_target,
        });
        self.invalidate();
    }

    /// Take back the most recent move. Does nothing when no move has been played.
    pub fn undo(&mut self) {
        let Some(undo) = self.undo_stack.pop() else {
            return;
        };
        let mv = undo.mv;
        let mover = if mv.is_promotion() {
            Piece::new(undo.placed_piece.color, PieceKind::Pawn)
        } else {
            undo.placed_piece
        };

        if mv.is_castling() {
            let (rook_from, rook_to) = castling_rook_squares(&mv);
            let rook = self.board.take(rook_to);
            self.board.set(rook_from, rook);
        }

        self.board.set(mv.end(), None);
        self.board.set(mv.start(), Some(mover));
        if let Some(captured) = mv.piece_captured() {
            self.board.set(mv.capture_square(), Some(captured));
        }

        if mover.kind == PieceKind::King {
            self.king_squares[mover.color.index()] = mv.start();
        }

        self.en_passant_target = undo.prev_en_passant_target;
        self.castling.restore();
        self.side_to_move = mover.color;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.analysis = None;
        self.checkmate = false;
        self.stalemate = false;
    }
}

/// Rook origin and destination for a castling king move.
fn castling_rook_squares(mv: &Move) -> (Square, Square) {
    let row = mv.start().row;
    if mv.end().col == KINGSIDE_CASTLE_KING_COL {
        (
            Square::new(row, KINGSIDE_ROOK_COL),
            Square::new(row, KINGSIDE_CASTLE_ROOK_COL),
        )
    } else {
        (
            Square::new(row, QUEENSIDE_ROOK_COL),
            Square::new(row, QUEENSIDE_CASTLE_ROOK_COL),
        )
    }
}
