//! Knight shape rule. Knights jump, so only the offset matters.

use crate::game_state::chess_types::{Board, Square};

pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn knight_move_is_legal(_board: &Board, source: Square, target: Square) -> bool {
    let (d_row, d_col) = source.delta_to(target);
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}
