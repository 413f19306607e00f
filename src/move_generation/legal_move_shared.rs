//! State shared by the per-piece generators during one generation call.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{analyze_king_state, KingState};
use crate::moves::move_descriptions::{Move, MoveTag};
use crate::utils::bit_primitives::iterate_bits;

/// Enough for any reachable position.
pub const MAX_LEGAL_MOVES: usize = 256;

pub struct MoveGenContext<'a> {
    pub game_state: &'a GameState,
    pub side: Color,
    pub enemy: Color,
    pub friendly_occ: Bitboard,
    pub enemy_occ: Bitboard,
    pub occupied: Bitboard,
    pub empty: Bitboard,
    pub king_state: KingState,
}

impl<'a> MoveGenContext<'a> {
    pub fn new(game_state: &'a GameState) -> Self {
        let side = game_state.side_to_move;
        let enemy = side.opposite();
        let friendly_occ = game_state.occupancy(side);
        let enemy_occ = game_state.occupancy(enemy);
        let occupied = friendly_occ | enemy_occ;

        Self {
            game_state,
            side,
            enemy,
            friendly_occ,
            enemy_occ,
            occupied,
            empty: !occupied,
            king_state: analyze_king_state(game_state, side),
        }
    }

    /// Squares a non-king piece on `from` may land on.
    #[inline(always)]
    pub fn allowed_mask(&self, from: Square) -> Bitboard {
        self.king_state.check_mask & self.king_state.pin_mask(from)
    }

    #[inline(always)]
    pub fn own(&self, kind: PieceKind) -> Bitboard {
        self.game_state.piece_bb(self.side, kind)
    }

    #[inline(always)]
    pub fn enemy_pieces(&self, kind: PieceKind) -> Bitboard {
        self.game_state.piece_bb(self.enemy, kind)
    }

    #[inline(always)]
    pub fn piece(&self, kind: PieceKind) -> Piece {
        Piece::new(self.side, kind)
    }
}

/// Emit every capture in `captures`, then every quiet move in `quiets`.
#[inline]
pub fn push_moves(
    out: &mut Vec<Move>,
    piece: Piece,
    from: Square,
    captures: Bitboard,
    quiets: Bitboard,
) {
    for to in iterate_bits(captures) {
        out.push(Move::new(from, to, MoveTag::Capture, piece));
    }
    for to in iterate_bits(quiets) {
        out.push(Move::new(from, to, MoveTag::Quiet, piece));
    }
}

/// Shared body of the bishop, rook, and queen generators.
#[inline]
pub fn generate_slider_moves(
    ctx: &MoveGenContext<'_>,
    out: &mut Vec<Move>,
    kind: PieceKind,
    attacks: fn(Square, Bitboard) -> Bitboard,
) {
    let piece = ctx.piece(kind);
    for from in iterate_bits(ctx.own(kind)) {
        let allowed = ctx.allowed_mask(from);
        if allowed == 0 {
            continue;
        }
        let targets = attacks(from, ctx.occupied) & allowed;
        push_moves(
            out,
            piece,
            from,
            targets & ctx.enemy_occ,
            targets & ctx.empty,
        );
    }
}
