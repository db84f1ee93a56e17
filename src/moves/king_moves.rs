//! King shape rule: one step in any direction. No castling in this variant.

use crate::game_state::chess_types::{Board, Square};

#[inline]
pub fn king_move_is_legal(_board: &Board, source: Square, target: Square) -> bool {
    let (d_row, d_col) = source.delta_to(target);
    d_row.abs() <= 1 && d_col.abs() <= 1 && (d_row, d_col) != (0, 0)
}
