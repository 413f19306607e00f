//! Fully legal move generation.
//!
//! Check evasion and pins are resolved up front from the king state, so every
//! emitted move is legal without a trial apply. Output order is king, knight,
//! pawn, bishop, rook, queen; under double check only king moves are produced.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{MoveGenContext, MAX_LEGAL_MOVES};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::Move;

pub fn generate_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut out = Vec::with_capacity(MAX_LEGAL_MOVES);
    generate_legal_moves_into(game_state, &mut out);
    out
}

/// Clears `out` and fills it with the legal moves of `game_state`.
pub fn generate_legal_moves_into(game_state: &GameState, out: &mut Vec<Move>) {
    out.clear();
    let ctx = MoveGenContext::new(game_state);

    generate_king_moves(&ctx, out);
    if ctx.king_state.is_double_check() {
        return;
    }

    generate_knight_moves(&ctx, out);
    generate_pawn_moves(&ctx, out);
    generate_bishop_moves(&ctx, out);
    generate_rook_moves(&ctx, out);
    generate_queen_moves(&ctx, out);
}
