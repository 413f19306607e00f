//! Canonical chess-rule constants.
//!
//! Named squares, starting bitboards, and the fixed squares involved in
//! castling.

use crate::game_state::chess_types::{Bitboard, Square};

pub const A1: Square = 0;
pub const B1: Square = 1;
pub const C1: Square = 2;
pub const D1: Square = 3;
pub const E1: Square = 4;
pub const F1: Square = 5;
pub const G1: Square = 6;
pub const H1: Square = 7;
pub const A8: Square = 56;
pub const B8: Square = 57;
pub const C8: Square = 58;
pub const D8: Square = 59;
pub const E8: Square = 60;
pub const F8: Square = 61;
pub const G8: Square = 62;
pub const H8: Square = 63;

pub const RANK_1: Bitboard = 0x0000_0000_0000_00FF;
pub const RANK_2: Bitboard = 0x0000_0000_0000_FF00;
pub const RANK_4: Bitboard = 0x0000_0000_FF00_0000;
pub const RANK_5: Bitboard = 0x0000_00FF_0000_0000;
pub const RANK_7: Bitboard = 0x00FF_0000_0000_0000;
pub const RANK_8: Bitboard = 0xFF00_0000_0000_0000;

// Starting bitboards, indexed like `Piece`.
pub const STARTING_PIECE_BOARDS: [Bitboard; 12] = [
    RANK_2,
    (1 << B1) | (1 << G1),
    (1 << C1) | (1 << F1),
    (1 << A1) | (1 << H1),
    1 << D1,
    1 << E1,
    RANK_7,
    (1 << B8) | (1 << G8),
    (1 << C8) | (1 << F8),
    (1 << A8) | (1 << H8),
    1 << D8,
    1 << E8,
];

/// Squares that must be empty between king and rook.
pub const WHITE_KINGSIDE_EMPTY: Bitboard = (1 << F1) | (1 << G1);
pub const WHITE_QUEENSIDE_EMPTY: Bitboard = (1 << B1) | (1 << C1) | (1 << D1);
pub const BLACK_KINGSIDE_EMPTY: Bitboard = (1 << F8) | (1 << G8);
pub const BLACK_QUEENSIDE_EMPTY: Bitboard = (1 << B8) | (1 << C8) | (1 << D8);
