//! Core value types shared by the board state, move generation, and perft.
//!
//! Squares are indexed `0 == a1` through `63 == h8` (rank-major). Pieces use a
//! flat 12-entry index where white occupies `0..=5` and black `6..=11`, so a
//! colour test is a range comparison on the index.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Board square index (`0..=63`).
pub type Square = u8;

/// One bit per square, bit `i` set when square `i` is in the set.
pub type Bitboard = u64;

/// Sentinel returned by bitscans of an empty bitboard.
pub const NO_SQUARE: Square = 64;

pub const EMPTY_BITBOARD: Bitboard = 0;
pub const FULL_BITBOARD: Bitboard = u64::MAX;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind without colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// Coloured piece, doubling as the index into `GameState::piece_boards`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    WhitePawn,
    WhiteKnight,
    WhiteBishop,
    WhiteRook,
    WhiteQueen,
    WhiteKing,
    BlackPawn,
    BlackKnight,
    BlackBishop,
    BlackRook,
    BlackQueen,
    BlackKing,
}

impl Piece {
    pub const ALL: [Piece; 12] = [
        Piece::WhitePawn,
        Piece::WhiteKnight,
        Piece::WhiteBishop,
        Piece::WhiteRook,
        Piece::WhiteQueen,
        Piece::WhiteKing,
        Piece::BlackPawn,
        Piece::BlackKnight,
        Piece::BlackBishop,
        Piece::BlackRook,
        Piece::BlackQueen,
        Piece::BlackKing,
    ];

    pub const WHITE_RANGE: std::ops::Range<usize> = 0..6;
    pub const BLACK_RANGE: std::ops::Range<usize> = 6..12;

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self::ALL[color.index() * 6 + kind.index()]
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        (self as usize) < 6
    }

    #[inline]
    pub const fn color(self) -> Color {
        if self.is_white() {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        match (self as usize) % 6 {
            0 => PieceKind::Pawn,
            1 => PieceKind::Knight,
            2 => PieceKind::Bishop,
            3 => PieceKind::Rook,
            4 => PieceKind::Queen,
            _ => PieceKind::King,
        }
    }

    /// Index range of all pieces belonging to `color`.
    #[inline]
    pub const fn range(color: Color) -> std::ops::Range<usize> {
        match color {
            Color::White => Self::WHITE_RANGE,
            Color::Black => Self::BLACK_RANGE,
        }
    }

    /// Placement letter: upper case for white, lower case for black.
    pub const fn to_char(self) -> char {
        let letter = match self.kind() {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        if self.is_white() {
            letter.to_ascii_uppercase()
        } else {
            letter
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self::new(color, kind))
    }
}

/// Four independent castling permissions. Moves only ever clear them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastleRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastleRights {
    pub const ALL: CastleRights = CastleRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: CastleRights = CastleRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    #[inline]
    pub fn kingside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    #[inline]
    pub fn queenside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    #[inline]
    pub fn clear_side(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            Color::Black => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
        }
    }
}
