use crate::game_state::chess_types::{Bitboard, Color, Square};
use crate::moves::knight_moves::square_if_on_board;

/// Diagonal capture squares, indexed `[color][square]`.
pub const PAWN_ATTACKS: [[Bitboard; 64]; 2] = [
    generate_pawn_attacks(Color::White),
    generate_pawn_attacks(Color::Black),
];

/// Squares a `color` pawn standing on `square` attacks.
///
/// Read the other way round, `pawn_attacks(defender, sq)` holds the squares
/// from which an enemy pawn would attack `sq`.
#[inline(always)]
pub const fn pawn_attacks(color: Color, square: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][square as usize]
}

const fn generate_pawn_attacks(color: Color) -> [Bitboard; 64] {
    let rank_step = match color {
        Color::White => 1,
        Color::Black => -1,
    };
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32 + rank_step;
        table[sq] = square_if_on_board(file - 1, rank) | square_if_on_board(file + 1, rank);
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks;
    use crate::game_state::chess_types::Color;

    #[test]
    fn pawns_attack_forward_diagonals() {
        let e2 = 12u8;
        let e7 = 52u8;
        assert_eq!(pawn_attacks(Color::White, e2), (1u64 << 19) | (1u64 << 21));
        assert_eq!(pawn_attacks(Color::Black, e7), (1u64 << 43) | (1u64 << 45));
    }

    #[test]
    fn edge_files_do_not_wrap() {
        let a2 = 8u8;
        let h7 = 55u8;
        assert_eq!(pawn_attacks(Color::White, a2), 1u64 << 17);
        assert_eq!(pawn_attacks(Color::Black, h7), 1u64 << 46);
    }

    #[test]
    fn back_rank_attacks_fall_off_the_board() {
        assert_eq!(pawn_attacks(Color::White, 60), 0);
        assert_eq!(pawn_attacks(Color::Black, 3), 0);
    }
}
