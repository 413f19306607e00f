use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_moves, MoveGenContext};
use crate::moves::knight_moves::knight_attacks;
use crate::moves::move_descriptions::Move;
use crate::utils::bit_primitives::iterate_bits;

pub fn generate_knight_moves(ctx: &MoveGenContext<'_>, out: &mut Vec<Move>) {
    let piece = ctx.piece(PieceKind::Knight);

    for from in iterate_bits(ctx.own(PieceKind::Knight)) {
        let allowed = ctx.allowed_mask(from);
        if allowed == 0 {
            continue;
        }
        let targets = knight_attacks(from) & allowed;
        push_moves(
            out,
            piece,
            from,
            targets & ctx.enemy_occ,
            targets & ctx.empty,
        );
    }
}
