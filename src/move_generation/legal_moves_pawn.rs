//! Pawn pushes, captures, promotions, and en passant.
//!
//! White pawns advance toward higher square indices (+8), black toward lower
//! (-8). En passant is checked separately from the other pawn moves because
//! it removes a piece from a square the capturing pawn never lands on.

use crate::game_state::chess_rules::{RANK_1, RANK_2, RANK_7, RANK_8};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::MoveGenContext;
use crate::moves::move_descriptions::{Move, MoveTag, Promotion};
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;
use crate::utils::bit_primitives::{iterate_bits, square_bit};

#[derive(Clone, Copy)]
struct PawnGeometry {
    start_rank: Bitboard,
    promotion_rank: Bitboard,
}

impl PawnGeometry {
    const fn for_color(color: Color) -> Self {
        match color {
            Color::White => Self {
                start_rank: RANK_2,
                promotion_rank: RANK_8,
            },
            Color::Black => Self {
                start_rank: RANK_7,
                promotion_rank: RANK_1,
            },
        }
    }
}

/// One square forward for `color`.
#[inline(always)]
pub(crate) const fn forward(color: Color, square: Square) -> Square {
    match color {
        Color::White => square + 8,
        Color::Black => square - 8,
    }
}

/// One square backward for `color`; the square an en-passant victim stands on
/// relative to the target square.
#[inline(always)]
pub(crate) const fn backward(color: Color, square: Square) -> Square {
    match color {
        Color::White => square - 8,
        Color::Black => square + 8,
    }
}

pub fn generate_pawn_moves(ctx: &MoveGenContext<'_>, out: &mut Vec<Move>) {
    let geometry = PawnGeometry::for_color(ctx.side);
    let piece = ctx.piece(PieceKind::Pawn);

    for from in iterate_bits(ctx.own(PieceKind::Pawn)) {
        let allowed = ctx.allowed_mask(from);
        if allowed == 0 {
            continue;
        }

        let captures = pawn_attacks(ctx.side, from) & ctx.enemy_occ & allowed;
        for to in iterate_bits(captures) {
            if square_bit(to) & geometry.promotion_rank != 0 {
                push_promotions(out, from, to, piece, MoveTag::CapturePromotion);
            } else {
                out.push(Move::new(from, to, MoveTag::Capture, piece));
            }
        }

        // Pawns on the last rank cannot exist, so `forward` stays on the board.
        let single = forward(ctx.side, from);
        if square_bit(single) & ctx.empty == 0 {
            continue;
        }

        if square_bit(single) & allowed != 0 {
            if square_bit(single) & geometry.promotion_rank != 0 {
                push_promotions(out, from, single, piece, MoveTag::Promotion);
            } else {
                out.push(Move::new(from, single, MoveTag::Quiet, piece));
            }
        }

        if square_bit(from) & geometry.start_rank != 0 {
            let double = forward(ctx.side, single);
            let double_bit = square_bit(double);
            if double_bit & ctx.empty & allowed != 0 {
                out.push(Move::new(from, double, MoveTag::DoublePawnPush, piece));
            }
        }
    }

    generate_en_passant(ctx, out);
}

fn push_promotions(
    out: &mut Vec<Move>,
    from: Square,
    to: Square,
    piece: Piece,
    tag: fn(Promotion) -> MoveTag,
) {
    for promotion in Promotion::ALL {
        out.push(Move::new(from, to, tag(promotion), piece));
    }
}

fn generate_en_passant(ctx: &MoveGenContext<'_>, out: &mut Vec<Move>) {
    let Some(target) = ctx.game_state.en_passant_square else {
        return;
    };
    let captured = backward(ctx.side, target);
    let target_bit = square_bit(target);
    let king_state = &ctx.king_state;

    // Either the landing square answers the check, or the pawn being taken is
    // the checker itself.
    let answers_check = target_bit & king_state.check_mask != 0
        || square_bit(captured) & king_state.check_mask != 0;
    if !answers_check {
        return;
    }

    let piece = ctx.piece(PieceKind::Pawn);
    let capturers = pawn_attacks(ctx.enemy, target) & ctx.own(PieceKind::Pawn);
    for from in iterate_bits(capturers) {
        if target_bit & king_state.pin_mask(from) == 0 {
            continue;
        }
        if en_passant_exposes_rank(ctx, from, captured) {
            continue;
        }
        out.push(Move::new(from, target, MoveTag::EnPassant, piece));
    }
}

/// Both pawns leave the same rank at once, which the pin analysis cannot see:
/// a king and an enemy rook or queen on that rank may end up facing each other.
fn en_passant_exposes_rank(ctx: &MoveGenContext<'_>, from: Square, captured: Square) -> bool {
    let king_sq = ctx.king_state.king_square;
    if king_sq == NO_SQUARE || king_sq / 8 != from / 8 {
        return false;
    }

    let rank_mask: Bitboard = 0xFF << (8 * (king_sq / 8));
    let horizontal_sliders = (ctx.enemy_pieces(PieceKind::Rook)
        | ctx.enemy_pieces(PieceKind::Queen))
        & rank_mask;
    if horizontal_sliders == 0 {
        return false;
    }

    let occupancy = ctx.occupied & !square_bit(from) & !square_bit(captured);
    rook_attacks(king_sq, occupancy) & horizontal_sliders != 0
}
