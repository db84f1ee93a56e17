//! Rook shape rule: any unobstructed rank or file move.

use crate::game_state::chess_types::{Board, Square};
use crate::moves::sliding_moves::{horizontal, vertical};

#[inline]
pub fn rook_move_is_legal(board: &Board, source: Square, target: Square) -> bool {
    horizontal(board, source, target) || vertical(board, source, target)
}
