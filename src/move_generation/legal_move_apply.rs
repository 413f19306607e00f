//! In-place make/unmake.
//!
//! `apply_move` returns the `UndoState` that `undo_move` needs to restore the
//! exact prior board; callers undo in reverse order of application. Moves are
//! trusted to come from the generator for this very position, and a capture
//! that finds nothing to capture is a broken invariant, not an error.

use crate::game_state::chess_rules::{A1, A8, H1, H8};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_pawn::backward;
use crate::moves::move_descriptions::{Move, MoveTag};
use crate::utils::bit_primitives::square_bit;

pub fn apply_move(game_state: &mut GameState, mv: Move) -> UndoState {
    let mover = mv.piece.color();
    let enemy = mover.opposite();
    let prev_en_passant_square = game_state.en_passant_square.take();
    let prev_castle_rights = game_state.castle_rights;
    let mut captured_piece = None;

    match mv.tag {
        MoveTag::Quiet => relocate(game_state, mv.piece, mv.from, mv.to),
        MoveTag::Capture => {
            captured_piece = Some(take_piece(game_state, enemy, mv.to));
            relocate(game_state, mv.piece, mv.from, mv.to);
        }
        MoveTag::DoublePawnPush => {
            relocate(game_state, mv.piece, mv.from, mv.to);
            game_state.en_passant_square = Some(backward(mover, mv.to));
        }
        MoveTag::EnPassant => {
            let victim = Piece::new(enemy, PieceKind::Pawn);
            game_state.piece_boards[victim.index()] &= !square_bit(backward(mover, mv.to));
            captured_piece = Some(victim);
            relocate(game_state, mv.piece, mv.from, mv.to);
        }
        MoveTag::Castle(castling) => {
            let (rook_from, rook_to) = castling.rook_squares();
            relocate(game_state, mv.piece, mv.from, mv.to);
            relocate(game_state, Piece::new(mover, PieceKind::Rook), rook_from, rook_to);
        }
        MoveTag::Promotion(promotion) => {
            promote(game_state, mv, promotion.kind());
        }
        MoveTag::CapturePromotion(promotion) => {
            captured_piece = Some(take_piece(game_state, enemy, mv.to));
            promote(game_state, mv, promotion.kind());
        }
    }

    match mv.piece.kind() {
        PieceKind::King => game_state.castle_rights.clear_side(mover),
        PieceKind::Rook => revoke_rights_without_home_rook(game_state, mover),
        _ => {}
    }
    if captured_piece.is_some() {
        revoke_rights_without_home_rook(game_state, enemy);
    }

    game_state.side_to_move = enemy;

    UndoState {
        captured_piece,
        prev_en_passant_square,
        prev_castle_rights,
    }
}

pub fn undo_move(game_state: &mut GameState, mv: Move, undo: UndoState) {
    let mover = mv.piece.color();
    game_state.side_to_move = mover;

    match mv.tag {
        MoveTag::Quiet | MoveTag::DoublePawnPush => {
            relocate(game_state, mv.piece, mv.to, mv.from);
        }
        MoveTag::Capture => {
            relocate(game_state, mv.piece, mv.to, mv.from);
            restore_captured(game_state, undo.captured_piece, mv.to);
        }
        MoveTag::EnPassant => {
            relocate(game_state, mv.piece, mv.to, mv.from);
            restore_captured(game_state, undo.captured_piece, backward(mover, mv.to));
        }
        MoveTag::Castle(castling) => {
            let (rook_from, rook_to) = castling.rook_squares();
            relocate(game_state, mv.piece, mv.to, mv.from);
            relocate(game_state, Piece::new(mover, PieceKind::Rook), rook_to, rook_from);
        }
        MoveTag::Promotion(promotion) => {
            unpromote(game_state, mv, promotion.kind());
        }
        MoveTag::CapturePromotion(promotion) => {
            unpromote(game_state, mv, promotion.kind());
            restore_captured(game_state, undo.captured_piece, mv.to);
        }
    }

    game_state.castle_rights = undo.prev_castle_rights;
    game_state.en_passant_square = undo.prev_en_passant_square;
}

#[inline(always)]
fn relocate(game_state: &mut GameState, piece: Piece, from: Square, to: Square) {
    game_state.piece_boards[piece.index()] ^= square_bit(from) | square_bit(to);
}

#[inline(always)]
fn promote(game_state: &mut GameState, mv: Move, kind: PieceKind) {
    let promoted = Piece::new(mv.piece.color(), kind);
    game_state.piece_boards[mv.piece.index()] &= !square_bit(mv.from);
    game_state.piece_boards[promoted.index()] |= square_bit(mv.to);
}

#[inline(always)]
fn unpromote(game_state: &mut GameState, mv: Move, kind: PieceKind) {
    let promoted = Piece::new(mv.piece.color(), kind);
    game_state.piece_boards[promoted.index()] &= !square_bit(mv.to);
    game_state.piece_boards[mv.piece.index()] |= square_bit(mv.from);
}

/// Remove whichever `color` piece stands on `square`.
fn take_piece(game_state: &mut GameState, color: Color, square: Square) -> Piece {
    let mask = square_bit(square);
    for index in Piece::range(color) {
        if game_state.piece_boards[index] & mask != 0 {
            game_state.piece_boards[index] &= !mask;
            return Piece::from_index(index);
        }
    }
    panic!("capture on square {square} found no {color:?} piece");
}

fn restore_captured(game_state: &mut GameState, captured: Option<Piece>, square: Square) {
    match captured {
        Some(piece) => game_state.piece_boards[piece.index()] |= square_bit(square),
        None => panic!("undo of a capture on square {square} carries no captured piece"),
    }
}

/// Clear any `color` castling right whose rook has left its home corner.
fn revoke_rights_without_home_rook(game_state: &mut GameState, color: Color) {
    let rooks = game_state.piece_bb(color, PieceKind::Rook);
    let rights = &mut game_state.castle_rights;
    match color {
        Color::White => {
            rights.white_kingside &= rooks & square_bit(H1) != 0;
            rights.white_queenside &= rooks & square_bit(A1) != 0;
        }
        Color::Black => {
            rights.black_kingside &= rooks & square_bit(H8) != 0;
            rights.black_queenside &= rooks & square_bit(A8) != 0;
        }
    }
}
