use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::push_square;

/// Long algebraic text for a generated move, such as `e2e4` or `e7e8q`.
///
/// Castling prints as the king's two-square step (`e1g1`). Only promotion
/// tags append a piece letter.
pub fn move_to_long_algebraic(mv: &Move) -> String {
    let mut out = String::with_capacity(5);
    push_square(&mut out, mv.from);
    push_square(&mut out, mv.to);

    if let Some(promotion) = mv.promotion() {
        out.push(promotion.to_char());
    }

    out
}
