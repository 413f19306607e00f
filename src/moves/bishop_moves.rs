//! Bishop attack resolution.
//!
//! Occupancy-aware diagonal attacks built from the precomputed rays. These
//! routines are performance-critical building blocks for both perft and check
//! detection.

use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::ray_tables::{ray_attacks, Direction};

#[inline]
pub fn bishop_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    ray_attacks(Direction::NorthEast, square, occupancy)
        | ray_attacks(Direction::NorthWest, square, occupancy)
        | ray_attacks(Direction::SouthEast, square, occupancy)
        | ray_attacks(Direction::SouthWest, square, occupancy)
}

#[cfg(test)]
pub(crate) mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::bishop_attacks;

    /// Step-by-step walk used as the reference for the table-driven resolver.
    pub(crate) fn trace_ray(square: i32, file_step: i32, rank_step: i32, occupancy: u64) -> u64 {
        let mut file = (square % 8) + file_step;
        let mut rank = (square / 8) + rank_step;
        let mut attacks = 0u64;

        while (0..8).contains(&file) && (0..8).contains(&rank) {
            let bit = 1u64 << (rank * 8 + file);
            attacks |= bit;

            if (occupancy & bit) != 0 {
                break;
            }

            file += file_step;
            rank += rank_step;
        }

        attacks
    }

    pub(crate) fn naive_bishop_attacks(square: u8, occupancy: u64) -> u64 {
        let sq = square as i32;
        trace_ray(sq, 1, 1, occupancy)
            | trace_ray(sq, -1, 1, occupancy)
            | trace_ray(sq, 1, -1, occupancy)
            | trace_ray(sq, -1, -1, occupancy)
    }

    #[test]
    fn bishop_rays_from_d4_have_thirteen_squares() {
        let d4 = 27u8;
        assert_eq!(bishop_attacks(d4, 0).count_ones(), 13);
    }

    #[test]
    fn bishop_blocker_stops_ray() {
        let c1 = 2u8;
        let blocker_on_e3 = 1u64 << 20;
        let attacks = bishop_attacks(c1, blocker_on_e3);

        assert_ne!(attacks & (1u64 << 20), 0);
        assert_eq!(attacks & (1u64 << 29), 0);
    }

    #[test]
    fn matches_naive_walk_for_random_occupancies() {
        let mut rng = StdRng::seed_from_u64(0xB15B0);
        for square in 0..64u8 {
            for _ in 0..200 {
                // sparse and dense boards both matter
                let occupancy = if rng.random_bool(0.5) {
                    rng.random::<u64>() & rng.random::<u64>()
                } else {
                    rng.random::<u64>()
                };
                assert_eq!(
                    bishop_attacks(square, occupancy),
                    naive_bishop_attacks(square, occupancy),
                    "square {square} occupancy {occupancy:#018x}"
                );
            }
        }
    }
}
