//! Low-level bit operations used by every bitboard routine.

use crate::game_state::chess_types::{Bitboard, Square, NO_SQUARE};

/// Index of the least significant set bit, or `NO_SQUARE` for an empty board.
#[inline(always)]
pub const fn bitscan_forward(bitboard: Bitboard) -> Square {
    bitboard.trailing_zeros() as Square
}

/// Index of the most significant set bit, or `NO_SQUARE` for an empty board.
#[inline(always)]
pub const fn bitscan_reverse(bitboard: Bitboard) -> Square {
    if bitboard == 0 {
        NO_SQUARE
    } else {
        63 - bitboard.leading_zeros() as Square
    }
}

#[inline(always)]
pub const fn square_bit(square: Square) -> Bitboard {
    1u64 << square
}

/// Iterator over set squares from least to most significant bit.
#[derive(Debug, Clone, Copy)]
pub struct BitIter(Bitboard);

impl Iterator for BitIter {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let square = bitscan_forward(self.0);
        self.0 &= self.0 - 1;
        Some(square)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for BitIter {}

/// Walks a copy of `bitboard`; the caller's value is left untouched.
#[inline(always)]
pub const fn iterate_bits(bitboard: Bitboard) -> BitIter {
    BitIter(bitboard)
}
