//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square indices for move printing and piece placement.

use crate::errors::{PerftError, PerftResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> PerftResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(PerftError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(PerftError::InvalidSquare(square.to_owned()));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> PerftResult<String> {
    if square > 63 {
        return Err(PerftError::InvalidSquare(square.to_string()));
    }

    let mut out = String::with_capacity(2);
    push_square(&mut out, square);
    Ok(out)
}

/// Append the two coordinate characters of an on-board square.
#[inline]
pub(crate) fn push_square(out: &mut String, square: Square) {
    out.push(char::from(b'a' + square % 8));
    out.push(char::from(b'1' + square / 8));
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::errors::PerftError;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 0);
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse"), 28);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 63);
        assert_eq!(square_to_algebraic(0).expect("0 should convert"), "a1");
        assert_eq!(square_to_algebraic(63).expect("63 should convert"), "h8");
    }

    #[test]
    fn rejects_off_board_text_and_indices() {
        assert_eq!(
            algebraic_to_square("i1"),
            Err(PerftError::InvalidSquare("i1".to_owned()))
        );
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e").is_err());
        assert!(square_to_algebraic(64).is_err());
    }
}
