//! Queen shape rule: rook or bishop movement along a single line.

use crate::game_state::chess_types::{Board, Square};
use crate::moves::sliding_moves::{diagonal, horizontal, vertical};

#[inline]
pub fn queen_move_is_legal(board: &Board, source: Square, target: Square) -> bool {
    horizontal(board, source, target)
        || vertical(board, source, target)
        || diagonal(board, source, target)
}
