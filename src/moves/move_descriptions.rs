//! Move records produced by the enumerator and consumed by apply/undo.
//!
//! A move is a plain value: origin, destination, the piece that moves, and a
//! tag naming the kind of move. The colour is carried by `piece`, so tags do
//! not repeat the white/black split.

use std::fmt;

use crate::game_state::chess_rules::{A1, A8, C1, C8, D1, D8, E1, E8, F1, F8, G1, G8, H1, H8};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Castling {
    WhiteKingside,
    WhiteQueenside,
    BlackKingside,
    BlackQueenside,
}

impl Castling {
    #[inline]
    pub const fn kingside(color: Color) -> Self {
        match color {
            Color::White => Castling::WhiteKingside,
            Color::Black => Castling::BlackKingside,
        }
    }

    #[inline]
    pub const fn queenside(color: Color) -> Self {
        match color {
            Color::White => Castling::WhiteQueenside,
            Color::Black => Castling::BlackQueenside,
        }
    }

    #[inline]
    pub const fn color(self) -> Color {
        match self {
            Castling::WhiteKingside | Castling::WhiteQueenside => Color::White,
            Castling::BlackKingside | Castling::BlackQueenside => Color::Black,
        }
    }

    /// `(king_from, king_to)`.
    #[inline]
    pub const fn king_squares(self) -> (Square, Square) {
        match self {
            Castling::WhiteKingside => (E1, G1),
            Castling::WhiteQueenside => (E1, C1),
            Castling::BlackKingside => (E8, G8),
            Castling::BlackQueenside => (E8, C8),
        }
    }

    /// `(rook_from, rook_to)`.
    #[inline]
    pub const fn rook_squares(self) -> (Square, Square) {
        match self {
            Castling::WhiteKingside => (H1, F1),
            Castling::WhiteQueenside => (A1, D1),
            Castling::BlackKingside => (H8, F8),
            Castling::BlackQueenside => (A8, D8),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Promotion {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl Promotion {
    /// Generation order for the four under- and full promotions.
    pub const ALL: [Promotion; 4] = [
        Promotion::Knight,
        Promotion::Bishop,
        Promotion::Rook,
        Promotion::Queen,
    ];

    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            Promotion::Knight => PieceKind::Knight,
            Promotion::Bishop => PieceKind::Bishop,
            Promotion::Rook => PieceKind::Rook,
            Promotion::Queen => PieceKind::Queen,
        }
    }

    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Promotion::Knight => 'n',
            Promotion::Bishop => 'b',
            Promotion::Rook => 'r',
            Promotion::Queen => 'q',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveTag {
    Quiet,
    Capture,
    DoublePawnPush,
    EnPassant,
    Castle(Castling),
    Promotion(Promotion),
    CapturePromotion(Promotion),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub tag: MoveTag,
    pub piece: Piece,
}

impl Move {
    #[inline(always)]
    pub const fn new(from: Square, to: Square, tag: MoveTag, piece: Piece) -> Self {
        Self {
            from,
            to,
            tag,
            piece,
        }
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.piece.color()
    }

    /// True for every move that removes an enemy piece, en passant included.
    #[inline]
    pub const fn is_capture(&self) -> bool {
        matches!(
            self.tag,
            MoveTag::Capture | MoveTag::EnPassant | MoveTag::CapturePromotion(_)
        )
    }

    #[inline]
    pub const fn promotion(&self) -> Option<Promotion> {
        match self.tag {
            MoveTag::Promotion(promotion) | MoveTag::CapturePromotion(promotion) => {
                Some(promotion)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_long_algebraic(self))
    }
}
