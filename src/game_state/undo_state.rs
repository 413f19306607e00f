use crate::game_state::chess_types::*;

/// Everything `undo_move` cannot re-derive from the move itself.
///
/// Produced by `apply_move` and consumed by the matching `undo_move`; tokens
/// nest like a call stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub captured_piece: Option<Piece>,
    pub prev_en_passant_square: Option<Square>,
    pub prev_castle_rights: CastleRights,
}
