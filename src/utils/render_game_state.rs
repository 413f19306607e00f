//! Terminal-oriented Unicode board renderer.
//!
//! Produces the board diagram printed before a perft run, followed by the
//! side to move, castling rights, and en-passant target.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::push_square;

/// Render the board to a Unicode string for terminal output, rank 8 on top.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            match game_state.piece_on_square(rank * 8 + file) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");
    out.push_str(&render_status(game_state));

    out
}

fn render_status(game_state: &GameState) -> String {
    let side = match game_state.side_to_move {
        Color::White => "white",
        Color::Black => "black",
    };

    let rights = game_state.castle_rights;
    let mut castling = String::new();
    for (allowed, letter) in [
        (rights.white_kingside, 'K'),
        (rights.white_queenside, 'Q'),
        (rights.black_kingside, 'k'),
        (rights.black_queenside, 'q'),
    ] {
        if allowed {
            castling.push(letter);
        }
    }
    if castling.is_empty() {
        castling.push('-');
    }

    let mut en_passant = String::new();
    match game_state.en_passant_square {
        Some(square) => push_square(&mut en_passant, square),
        None => en_passant.push('-'),
    }

    format!("to move: {side}  castling: {castling}  en passant: {en_passant}")
}

fn piece_to_unicode(piece: Piece) -> char {
    match piece {
        Piece::WhitePawn => '♙',
        Piece::WhiteKnight => '♘',
        Piece::WhiteBishop => '♗',
        Piece::WhiteRook => '♖',
        Piece::WhiteQueen => '♕',
        Piece::WhiteKing => '♔',
        Piece::BlackPawn => '♟',
        Piece::BlackKnight => '♞',
        Piece::BlackBishop => '♝',
        Piece::BlackRook => '♜',
        Piece::BlackQueen => '♛',
        Piece::BlackKing => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::chess_types::{CastleRights, Color, GameState};

    #[test]
    fn start_position_diagram() {
        let text = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[10], "to move: white  castling: KQkq  en passant: -");
    }

    #[test]
    fn status_line_shows_en_passant_and_missing_rights() {
        let game = GameState::from_placement("Ke1 Pe4 ke8", Color::Black, CastleRights::NONE, Some(20))
            .expect("placement should parse");
        let text = render_game_state(&game);
        assert!(text.ends_with("to move: black  castling: -  en passant: e3"));
    }
}
