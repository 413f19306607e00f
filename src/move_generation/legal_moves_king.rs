use crate::game_state::chess_rules::{
    BLACK_KINGSIDE_EMPTY, BLACK_QUEENSIDE_EMPTY, WHITE_KINGSIDE_EMPTY, WHITE_QUEENSIDE_EMPTY,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{push_moves, MoveGenContext};
use crate::moves::king_moves::king_attacks;
use crate::moves::move_descriptions::{Castling, Move, MoveTag};
use crate::utils::bit_primitives::{iterate_bits, square_bit};

pub fn generate_king_moves(ctx: &MoveGenContext<'_>, out: &mut Vec<Move>) {
    let from = ctx.king_state.king_square;
    if from == NO_SQUARE {
        return;
    }

    let piece = ctx.piece(PieceKind::King);
    // The king must not hide behind itself from a slider on its own line.
    let occupancy_without_king = ctx.occupied & !square_bit(from);

    let mut safe = EMPTY_BITBOARD;
    for to in iterate_bits(king_attacks(from) & !ctx.friendly_occ) {
        if !is_square_attacked(ctx.game_state, to, occupancy_without_king, ctx.enemy) {
            safe |= square_bit(to);
        }
    }
    push_moves(out, piece, from, safe & ctx.enemy_occ, safe & ctx.empty);

    if !ctx.king_state.is_in_check() {
        generate_castling_moves(ctx, out);
    }
}

fn generate_castling_moves(ctx: &MoveGenContext<'_>, out: &mut Vec<Move>) {
    let rights = ctx.game_state.castle_rights;
    let (kingside_path, queenside_path) = match ctx.side {
        Color::White => (WHITE_KINGSIDE_EMPTY, WHITE_QUEENSIDE_EMPTY),
        Color::Black => (BLACK_KINGSIDE_EMPTY, BLACK_QUEENSIDE_EMPTY),
    };

    if rights.kingside(ctx.side) {
        try_castle(ctx, out, Castling::kingside(ctx.side), kingside_path);
    }
    if rights.queenside(ctx.side) {
        try_castle(ctx, out, Castling::queenside(ctx.side), queenside_path);
    }
}

fn try_castle(ctx: &MoveGenContext<'_>, out: &mut Vec<Move>, castling: Castling, path: Bitboard) {
    let (king_from, king_to) = castling.king_squares();
    let (rook_from, rook_to) = castling.rook_squares();

    if ctx.king_state.king_square != king_from
        || ctx.own(PieceKind::Rook) & square_bit(rook_from) == 0
        || ctx.occupied & path != 0
    {
        return;
    }

    // The king crosses the rook's destination and lands on its own; the
    // queenside b-file square only has to be empty.
    for transit in [rook_to, king_to] {
        if is_square_attacked(ctx.game_state, transit, ctx.occupied, ctx.enemy) {
            return;
        }
    }

    out.push(Move::new(
        king_from,
        king_to,
        MoveTag::Castle(castling),
        ctx.piece(PieceKind::King),
    ));
}
