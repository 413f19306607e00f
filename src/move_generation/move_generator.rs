use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves_into;
use crate::moves::move_descriptions::Move;

/// Source of legal moves for the perft driver.
pub trait MoveGenerator: Send + Sync {
    /// Replace the contents of `out` with every legal move in `game_state`.
    fn generate_legal_moves_into(&self, game_state: &GameState, out: &mut Vec<Move>);

    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<Move> {
        let mut out = Vec::new();
        self.generate_legal_moves_into(game_state, &mut out);
        out
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    #[inline]
    fn generate_legal_moves_into(&self, game_state: &GameState, out: &mut Vec<Move>) {
        generate_legal_moves_into(game_state, out);
    }
}
