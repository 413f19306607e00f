//! Crate root module declarations for the bitboard perft engine.
//!
//! Exposes the board state, the precomputed attack tables, legal move
//! generation with in-place make/unmake, the perft driver, and the text and
//! configuration helpers used by the `perft` binary, benches, and tests.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod ray_tables;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod bit_primitives;
    pub mod long_algebraic;
    pub mod reference_positions;
    pub mod render_game_state;
    pub mod run_config;
}
