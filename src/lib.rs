//! Crate root module declarations for the chess rules engine.
//!
//! This file exposes the board and game state model, move values, legal move
//! generation, notation helpers and the external move-oracle boundary so
//! binaries, benches and tests can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod castling_rights;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod chess_move;
    pub mod piece_offsets;
    pub mod promotion_choice;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod oracle {
    pub mod oracle_random;
    pub mod oracle_trait;
    pub mod oracle_uci_process;
    pub mod suggestion;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod oracle_match_harness;
    pub mod render_game_state;
}
