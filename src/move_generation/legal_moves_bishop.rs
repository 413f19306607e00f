use crate::game_state::chess_types::PieceKind;
use crate::move_generation::legal_move_shared::{generate_slider_moves, MoveGenContext};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(ctx: &MoveGenContext<'_>, out: &mut Vec<Move>) {
    generate_slider_moves(ctx, out, PieceKind::Bishop, bishop_attacks);
}
