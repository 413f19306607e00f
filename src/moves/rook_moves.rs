use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::ray_tables::{ray_attacks, Direction};

#[inline]
pub fn rook_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    ray_attacks(Direction::North, square, occupancy)
        | ray_attacks(Direction::South, square, occupancy)
        | ray_attacks(Direction::East, square, occupancy)
        | ray_attacks(Direction::West, square, occupancy)
}

#[cfg(test)]
pub(crate) mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::rook_attacks;
    use crate::moves::bishop_moves::tests::trace_ray;

    pub(crate) fn naive_rook_attacks(square: u8, occupancy: u64) -> u64 {
        let sq = square as i32;
        trace_ray(sq, 0, 1, occupancy)
            | trace_ray(sq, 0, -1, occupancy)
            | trace_ray(sq, 1, 0, occupancy)
            | trace_ray(sq, -1, 0, occupancy)
    }

    #[test]
    fn rook_rays_from_d4_have_fourteen_squares() {
        let d4 = 27u8;
        assert_eq!(rook_attacks(d4, 0).count_ones(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let a1 = 0u8;
        let blocker_on_a4 = 1u64 << 24;
        let attacks = rook_attacks(a1, blocker_on_a4);

        assert_ne!(attacks & (1u64 << 24), 0);
        assert_eq!(attacks & (1u64 << 32), 0);
    }

    #[test]
    fn matches_naive_walk_for_every_single_blocker() {
        for square in 0..64u8 {
            for blocker in 0..64u8 {
                let occupancy = 1u64 << blocker;
                assert_eq!(
                    rook_attacks(square, occupancy),
                    naive_rook_attacks(square, occupancy),
                    "square {square} blocker {blocker}"
                );
            }
        }
    }

    #[test]
    fn matches_naive_walk_for_random_occupancies() {
        let mut rng = StdRng::seed_from_u64(0x7007);
        for square in 0..64u8 {
            for _ in 0..200 {
                let occupancy = if rng.random_bool(0.5) {
                    rng.random::<u64>() & rng.random::<u64>()
                } else {
                    rng.random::<u64>()
                };
                assert_eq!(
                    rook_attacks(square, occupancy),
                    naive_rook_attacks(square, occupancy),
                    "square {square} occupancy {occupancy:#018x}"
                );
            }
        }
    }
}
