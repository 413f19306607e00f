use crate::game_state::chess_types::{Bitboard, Square};

pub const KNIGHT_ATTACKS: [Bitboard; 64] = generate_knight_attacks();

#[inline(always)]
pub const fn knight_attacks(square: Square) -> Bitboard {
    KNIGHT_ATTACKS[square as usize]
}

/// `(file_step, rank_step)` jumps.
const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const fn generate_knight_attacks() -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut jump = 0usize;
        while jump < KNIGHT_JUMPS.len() {
            let (file_step, rank_step) = KNIGHT_JUMPS[jump];
            table[sq] |= square_if_on_board(file + file_step, rank + rank_step);
            jump += 1;
        }
        sq += 1;
    }

    table
}

/// One-hot bitboard for `(file, rank)`, or empty when it lies off the board.
pub(crate) const fn square_if_on_board(file: i32, rank: i32) -> Bitboard {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    1u64 << ((rank as usize) * 8 + (file as usize))
}
