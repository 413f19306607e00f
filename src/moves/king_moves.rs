//! King attack table.
//!
//! Used for king step generation, for "is this square next to the enemy
//! king" tests, and for king adjacency in check detection.

use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::knight_moves::square_if_on_board;

pub const KING_ATTACKS: [Bitboard; 64] = generate_king_attacks();

#[inline(always)]
pub const fn king_attacks(square: Square) -> Bitboard {
    KING_ATTACKS[square as usize]
}

const fn generate_king_attacks() -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;

        let mut rank_step = -1;
        while rank_step <= 1 {
            let mut file_step = -1;
            while file_step <= 1 {
                if rank_step != 0 || file_step != 0 {
                    attacks |= square_if_on_board(file + file_step, rank + rank_step);
                }
                file_step += 1;
            }
            rank_step += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{king_attacks, KING_ATTACKS};

    #[test]
    fn king_attacks_from_a1_has_three_targets() {
        let a1 = 0u8;
        assert_eq!(KING_ATTACKS[a1 as usize].count_ones(), 3);
        assert_eq!(king_attacks(a1), (1u64 << 1) | (1u64 << 8) | (1u64 << 9));
    }

    #[test]
    fn king_attacks_from_e4_surround_the_square() {
        let e4 = 28u8;
        assert_eq!(king_attacks(e4).count_ones(), 8);
        assert_eq!(king_attacks(e4) & (1u64 << e4), 0);
    }
}
