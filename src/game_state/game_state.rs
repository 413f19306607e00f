//! Mutable board state owned by a single caller.
//!
//! `GameState` holds exactly what move generation cannot derive: twelve piece
//! bitboards, the side to move, castling rights, and the en-passant target.
//! Occupancy is recomputed from the piece boards on demand. Apply/undo mutate
//! it in place, so parallel callers clone it instead of sharing it.

use crate::errors::{PerftError, PerftResult};
use crate::game_state::chess_rules::{RANK_1, RANK_8, STARTING_PIECE_BOARDS};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use crate::utils::bit_primitives::{bitscan_forward, square_bit};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    /// Indexed by `Piece::index()`.
    pub piece_boards: [Bitboard; 12],
    pub side_to_move: Color,
    pub castle_rights: CastleRights,
    pub en_passant_square: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            piece_boards: [EMPTY_BITBOARD; 12],
            side_to_move: Color::White,
            castle_rights: CastleRights::NONE,
            en_passant_square: None,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        let mut game_state = Self::default();
        game_state.set_starting_position();
        game_state
    }

    /// Reset to the standard opening arrangement, white to move.
    pub fn set_starting_position(&mut self) {
        self.piece_boards = STARTING_PIECE_BOARDS;
        self.side_to_move = Color::White;
        self.castle_rights = CastleRights::ALL;
        self.en_passant_square = None;
    }

    /// Build a position from whitespace-separated placement tokens such as
    /// `"Ke1 Ra1 ke8 pd7"`: one piece letter (upper case white, lower case
    /// black) followed by a square.
    pub fn from_placement(
        placement: &str,
        side_to_move: Color,
        castle_rights: CastleRights,
        en_passant_square: Option<Square>,
    ) -> PerftResult<Self> {
        let mut game_state = Self {
            side_to_move,
            castle_rights,
            en_passant_square,
            ..Self::default()
        };

        for token in placement.split_whitespace() {
            let mut chars = token.chars();
            let piece = chars
                .next()
                .and_then(Piece::from_char)
                .ok_or_else(|| PerftError::InvalidPlacementToken(token.to_owned()))?;
            let square = algebraic_to_square(chars.as_str())
                .map_err(|_| PerftError::InvalidPlacementToken(token.to_owned()))?;
            game_state.place_piece(piece, square)?;
        }

        Ok(game_state)
    }

    pub fn place_piece(&mut self, piece: Piece, square: Square) -> PerftResult<()> {
        if square >= NO_SQUARE {
            return Err(PerftError::InvalidSquare(square.to_string()));
        }
        if self.piece_on_square(square).is_some() {
            return Err(PerftError::SquareOccupied(square_to_algebraic(square)?));
        }
        if piece.kind() == PieceKind::Pawn && square_bit(square) & (RANK_1 | RANK_8) != 0 {
            return Err(PerftError::PawnOnBackRank(square_to_algebraic(square)?));
        }
        self.piece_boards[piece.index()] |= square_bit(square);
        Ok(())
    }

    #[inline(always)]
    pub fn pieces(&self, piece: Piece) -> Bitboard {
        self.piece_boards[piece.index()]
    }

    #[inline(always)]
    pub fn piece_bb(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.piece_boards[Piece::new(color, kind).index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.piece_boards[Piece::range(color)]
            .iter()
            .fold(EMPTY_BITBOARD, |acc, bb| acc | bb)
    }

    #[inline]
    pub fn occupancy_all(&self) -> Bitboard {
        self.piece_boards
            .iter()
            .fold(EMPTY_BITBOARD, |acc, bb| acc | bb)
    }

    pub fn piece_on_square(&self, square: Square) -> Option<Piece> {
        let mask = square_bit(square);
        Piece::ALL
            .into_iter()
            .find(|piece| self.piece_boards[piece.index()] & mask != 0)
    }

    /// Square of `color`'s king, `NO_SQUARE` if the board has none.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        bitscan_forward(self.piece_bb(color, PieceKind::King))
    }
}
