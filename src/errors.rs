//! Boundary error type.
//!
//! Move generation, apply, and undo never fail for positions the engine
//! produced itself; broken invariants there panic. `PerftError` covers the
//! inputs that arrive from outside: run configuration, square text, and piece
//! placement text.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PerftError {
    #[error("perft depth must be at least 1, got {0}")]
    InvalidDepth(u8),

    #[error("worker thread count must be at least 1")]
    InvalidThreadCount,

    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),

    #[error("invalid placement token: {0}")]
    InvalidPlacementToken(String),

    #[error("pawn cannot stand on the back rank: {0}")]
    PawnOnBackRank(String),

    #[error("square {0} is already occupied")]
    SquareOccupied(String),

    #[error("unknown reference position: {0}")]
    UnknownPosition(String),
}

pub type PerftResult<T> = Result<T, PerftError>;
