//! Attack queries and the per-position king safety record.
//!
//! `analyze_king_state` is computed once per generation call. It yields the
//! mask every non-king move must land in to answer a check, and the ray each
//! pinned piece is confined to.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::ray_tables::in_between;
use crate::moves::rook_moves::rook_attacks;
use crate::utils::bit_primitives::{bitscan_forward, iterate_bits, square_bit};

/// At most one pin per direction around the king.
pub const MAX_PINS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pin {
    pub pinned: Square,
    pub pinner: Square,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KingState {
    pub king_square: Square,
    pub check_count: u8,
    /// All ones when not in check, the checker plus any blocking squares
    /// under single check, empty under double check.
    pub check_mask: Bitboard,
    pins: [Pin; MAX_PINS],
    pin_count: usize,
    pinned: Bitboard,
    pin_rays: [Bitboard; 64],
}

impl KingState {
    fn unchecked(king_square: Square) -> Self {
        Self {
            king_square,
            check_count: 0,
            check_mask: FULL_BITBOARD,
            pins: [Pin::default(); MAX_PINS],
            pin_count: 0,
            pinned: EMPTY_BITBOARD,
            pin_rays: [FULL_BITBOARD; 64],
        }
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.check_count > 0
    }

    #[inline]
    pub fn is_double_check(&self) -> bool {
        self.check_count >= 2
    }

    #[inline]
    pub fn pins(&self) -> &[Pin] {
        &self.pins[..self.pin_count]
    }

    #[inline]
    pub fn pinned(&self) -> Bitboard {
        self.pinned
    }

    /// Squares a piece on `square` may move to without exposing its king.
    #[inline(always)]
    pub fn pin_mask(&self, square: Square) -> Bitboard {
        self.pin_rays[square as usize]
    }

    fn add_check(&mut self, mask: Bitboard) {
        self.check_count += 1;
        self.check_mask = if self.check_count == 1 {
            mask
        } else {
            EMPTY_BITBOARD
        };
    }

    fn add_pin(&mut self, pinned: Square, pinner: Square, ray: Bitboard) {
        self.pins[self.pin_count] = Pin { pinned, pinner };
        self.pin_count += 1;
        self.pinned |= square_bit(pinned);
        self.pin_rays[pinned as usize] = ray;
    }
}

/// True when any `attacker_color` piece attacks `square`, with sliders
/// resolved against `occupancy` instead of the board's own.
pub fn is_square_attacked(
    game_state: &GameState,
    square: Square,
    occupancy: Bitboard,
    attacker_color: Color,
) -> bool {
    let pawns = game_state.piece_bb(attacker_color, PieceKind::Pawn);
    if pawn_attacks(attacker_color.opposite(), square) & pawns != 0 {
        return true;
    }

    let knights = game_state.piece_bb(attacker_color, PieceKind::Knight);
    if knight_attacks(square) & knights != 0 {
        return true;
    }

    let kings = game_state.piece_bb(attacker_color, PieceKind::King);
    if king_attacks(square) & kings != 0 {
        return true;
    }

    let queens = game_state.piece_bb(attacker_color, PieceKind::Queen);
    let bishops_queens = game_state.piece_bb(attacker_color, PieceKind::Bishop) | queens;
    if bishop_attacks(square, occupancy) & bishops_queens != 0 {
        return true;
    }

    let rooks_queens = game_state.piece_bb(attacker_color, PieceKind::Rook) | queens;
    rook_attacks(square, occupancy) & rooks_queens != 0
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let king_sq = game_state.king_square(color);
    if king_sq == NO_SQUARE {
        return false;
    }
    is_square_attacked(
        game_state,
        king_sq,
        game_state.occupancy_all(),
        color.opposite(),
    )
}

pub fn analyze_king_state(game_state: &GameState, side: Color) -> KingState {
    let king_sq = game_state.king_square(side);
    let mut state = KingState::unchecked(king_sq);
    if king_sq == NO_SQUARE {
        return state;
    }

    let enemy = side.opposite();
    let friendly_occ = game_state.occupancy(side);
    let enemy_occ = game_state.occupancy(enemy);

    let leapers = (pawn_attacks(side, king_sq) & game_state.piece_bb(enemy, PieceKind::Pawn))
        | (knight_attacks(king_sq) & game_state.piece_bb(enemy, PieceKind::Knight));
    for checker in iterate_bits(leapers) {
        state.add_check(square_bit(checker));
    }

    // Friendly pieces are transparent here so pins show up as a single
    // blocker on the ray; the nearest enemy piece still ends the ray.
    let queens = game_state.piece_bb(enemy, PieceKind::Queen);
    let snipers = (rook_attacks(king_sq, enemy_occ)
        & (game_state.piece_bb(enemy, PieceKind::Rook) | queens))
        | (bishop_attacks(king_sq, enemy_occ)
            & (game_state.piece_bb(enemy, PieceKind::Bishop) | queens));

    for sniper in iterate_bits(snipers) {
        let ray = in_between(king_sq, sniper);
        let blockers = ray & friendly_occ;
        match blockers.count_ones() {
            0 => state.add_check(ray),
            1 => state.add_pin(bitscan_forward(blockers), sniper, ray),
            _ => {}
        }
    }

    state
}
