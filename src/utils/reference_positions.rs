//! Standard perft test positions with their published node counts.
//!
//! Positions are written in placement text rather than FEN. Expected counts
//! start at depth 1.

use crate::errors::{PerftError, PerftResult};
use crate::game_state::chess_types::{CastleRights, Color, Square};
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy)]
pub struct ReferencePosition {
    pub name: &'static str,
    pub placement: &'static str,
    pub side_to_move: Color,
    pub castle_rights: CastleRights,
    pub en_passant_square: Option<Square>,
    pub expected_nodes: &'static [u64],
}

impl ReferencePosition {
    pub fn game_state(&self) -> PerftResult<GameState> {
        GameState::from_placement(
            self.placement,
            self.side_to_move,
            self.castle_rights,
            self.en_passant_square,
        )
    }

    /// Published count for `depth`, if this table carries one.
    pub fn expected_at(&self, depth: u8) -> Option<u64> {
        let index = (depth as usize).checked_sub(1)?;
        self.expected_nodes.get(index).copied()
    }
}

pub const REFERENCE_POSITIONS: [ReferencePosition; 5] = [
    ReferencePosition {
        name: "startpos",
        placement: "Ra1 Nb1 Bc1 Qd1 Ke1 Bf1 Ng1 Rh1 \
                    Pa2 Pb2 Pc2 Pd2 Pe2 Pf2 Pg2 Ph2 \
                    pa7 pb7 pc7 pd7 pe7 pf7 pg7 ph7 \
                    ra8 nb8 bc8 qd8 ke8 bf8 ng8 rh8",
        side_to_move: Color::White,
        castle_rights: CastleRights::ALL,
        en_passant_square: None,
        expected_nodes: &[20, 400, 8_902, 197_281, 4_865_609, 119_060_324],
    },
    ReferencePosition {
        name: "kiwipete",
        placement: "Ra1 Ke1 Rh1 Pa2 Pb2 Pc2 Bd2 Be2 Pf2 Pg2 Ph2 \
                    Nc3 Qf3 ph3 pb4 Pe4 Pd5 Ne5 \
                    ba6 nb6 pe6 nf6 pg6 pa7 pc7 pd7 qe7 pf7 bg7 \
                    ra8 ke8 rh8",
        side_to_move: Color::White,
        castle_rights: CastleRights::ALL,
        en_passant_square: None,
        expected_nodes: &[48, 2_039, 97_862, 4_085_603],
    },
    ReferencePosition {
        name: "position3",
        placement: "Pe2 Pg2 Rb4 pf4 kh4 Ka5 Pb5 rh5 pd6 pc7",
        side_to_move: Color::White,
        castle_rights: CastleRights::NONE,
        en_passant_square: None,
        expected_nodes: &[14, 191, 2_812, 43_238, 674_624],
    },
    ReferencePosition {
        name: "position4",
        placement: "Ra1 Qd1 Rf1 Kg1 Pa2 pb2 Pd2 Pg2 Ph2 \
                    qa3 Nf3 Ba4 Bb4 Pc4 Pe4 na5 Pb5 \
                    bb6 nf6 bg6 Nh6 Pa7 pb7 pc7 pd7 pf7 pg7 ph7 \
                    ra8 ke8 rh8",
        side_to_move: Color::White,
        castle_rights: CastleRights {
            white_kingside: false,
            white_queenside: false,
            black_kingside: true,
            black_queenside: true,
        },
        en_passant_square: None,
        expected_nodes: &[6, 264, 9_467, 422_333],
    },
    ReferencePosition {
        name: "position5",
        placement: "Ra1 Nb1 Bc1 Qd1 Ke1 Rh1 Pa2 Pb2 Pc2 Ne2 nf2 Pg2 Ph2 \
                    Bc4 pc6 pa7 pb7 Pd7 be7 pf7 pg7 ph7 \
                    ra8 nb8 bc8 qd8 kf8 rh8",
        side_to_move: Color::White,
        castle_rights: CastleRights {
            white_kingside: true,
            white_queenside: true,
            black_kingside: false,
            black_queenside: false,
        },
        en_passant_square: None,
        expected_nodes: &[44, 1_486, 62_379, 2_103_487],
    },
];

pub fn reference_position(name: &str) -> PerftResult<&'static ReferencePosition> {
    REFERENCE_POSITIONS
        .iter()
        .find(|position| position.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| PerftError::UnknownPosition(name.to_owned()))
}

pub fn reference_position_names() -> impl Iterator<Item = &'static str> {
    REFERENCE_POSITIONS.iter().map(|position| position.name)
}
