use crate::game_state::chess_types::PieceKind;
use crate::move_generation::legal_move_shared::{generate_slider_moves, MoveGenContext};
use crate::moves::move_descriptions::Move;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(ctx: &MoveGenContext<'_>, out: &mut Vec<Move>) {
    generate_slider_moves(ctx, out, PieceKind::Rook, rook_attacks);
}
