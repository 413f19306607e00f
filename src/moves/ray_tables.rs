//! Precomputed sliding rays and in-between masks.
//!
//! `RAYS[direction][square]` is the full ray from `square` to the board edge,
//! origin excluded. `IN_BETWEEN[a][b]` holds the squares strictly between `a`
//! and `b` plus `b` itself when the two share a rank, file, or diagonal, and is
//! empty otherwise. Including `b` lets the same mask serve as a truncated ray,
//! as a check mask (block or capture the checker), and as a pin ray (slide
//! along it or capture the pinner).
//!
//! Both tables are built at compile time and never written afterwards.

use crate::game_state::chess_types::{Bitboard, Square};
use crate::utils::bit_primitives::{bitscan_forward, bitscan_reverse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// `(file_step, rank_step)` for one step along the direction.
    pub const fn steps(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (-1, 1),
            Direction::SouthEast => (1, -1),
            Direction::SouthWest => (-1, -1),
        }
    }

    /// True when walking the ray increases the square index, so the nearest
    /// square on it is the lowest set bit.
    #[inline(always)]
    pub const fn is_increasing(self) -> bool {
        matches!(
            self,
            Direction::North | Direction::East | Direction::NorthEast | Direction::NorthWest
        )
    }
}

pub static RAYS: [[Bitboard; 64]; 8] = generate_rays();
pub static IN_BETWEEN: [[Bitboard; 64]; 64] = generate_in_between();

#[inline(always)]
pub fn ray(direction: Direction, square: Square) -> Bitboard {
    RAYS[direction.index()][square as usize]
}

#[inline(always)]
pub fn in_between(from: Square, to: Square) -> Bitboard {
    IN_BETWEEN[from as usize][to as usize]
}

/// Squares reached from `square` along one direction, stopping at and
/// including the first occupied square.
#[inline(always)]
pub fn ray_attacks(direction: Direction, square: Square, occupancy: Bitboard) -> Bitboard {
    let full_ray = ray(direction, square);
    let blockers = full_ray & occupancy;
    if blockers == 0 {
        return full_ray;
    }

    let nearest = if direction.is_increasing() {
        bitscan_forward(blockers)
    } else {
        bitscan_reverse(blockers)
    };
    in_between(square, nearest)
}

const fn generate_rays() -> [[Bitboard; 64]; 8] {
    let mut table = [[0u64; 64]; 8];
    let mut dir = 0usize;

    while dir < 8 {
        let (file_step, rank_step) = Direction::ALL[dir].steps();
        let mut sq = 0usize;
        while sq < 64 {
            let mut file = (sq % 8) as i32 + file_step;
            let mut rank = (sq / 8) as i32 + rank_step;
            let mut bits = 0u64;
            while file >= 0 && file < 8 && rank >= 0 && rank < 8 {
                bits |= 1u64 << (rank * 8 + file);
                file += file_step;
                rank += rank_step;
            }
            table[dir][sq] = bits;
            sq += 1;
        }
        dir += 1;
    }

    table
}

const fn generate_in_between() -> [[Bitboard; 64]; 64] {
    let mut table = [[0u64; 64]; 64];
    let mut from = 0usize;

    while from < 64 {
        let mut dir = 0usize;
        while dir < 8 {
            let (file_step, rank_step) = Direction::ALL[dir].steps();
            let mut file = (from % 8) as i32 + file_step;
            let mut rank = (from / 8) as i32 + rank_step;
            let mut path = 0u64;
            while file >= 0 && file < 8 && rank >= 0 && rank < 8 {
                let to = (rank * 8 + file) as usize;
                path |= 1u64 << to;
                table[from][to] = path;
                file += file_step;
                rank += rank_step;
            }
            dir += 1;
        }
        from += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{in_between, ray, ray_attacks, Direction};

    #[test]
    fn rays_from_a1() {
        assert_eq!(ray(Direction::North, 0), 0x0101_0101_0101_0100);
        assert_eq!(ray(Direction::East, 0), 0xFE);
        assert_eq!(ray(Direction::NorthEast, 0), 0x8040_2010_0804_0200);
        assert_eq!(ray(Direction::South, 0), 0);
        assert_eq!(ray(Direction::West, 0), 0);
    }

    #[test]
    fn in_between_includes_target_only() {
        let a1 = 0u8;
        let a4 = 24u8;
        assert_eq!(in_between(a1, a4), (1u64 << 8) | (1u64 << 16) | (1u64 << 24));
        assert_eq!(in_between(a4, a1), (1u64 << 16) | (1u64 << 8) | 1u64);
        // adjacent squares: only the target
        assert_eq!(in_between(a1, 9), 1u64 << 9);
    }

    #[test]
    fn unaligned_squares_have_empty_mask() {
        let a1 = 0u8;
        let b3 = 17u8;
        assert_eq!(in_between(a1, b3), 0);
        assert_eq!(in_between(a1, a1), 0);
    }

    #[test]
    fn ray_attacks_stop_at_nearest_blocker_in_both_senses() {
        let d4 = 27u8;
        let blockers = (1u64 << 43) | (1u64 << 51) | (1u64 << 11) | (1u64 << 3);
        // north: d5 empty, d6 blocks
        assert_eq!(ray_attacks(Direction::North, d4, blockers), (1u64 << 35) | (1u64 << 43));
        // south: d3 empty, d2 blocks
        assert_eq!(ray_attacks(Direction::South, d4, blockers), (1u64 << 19) | (1u64 << 11));
    }
}
