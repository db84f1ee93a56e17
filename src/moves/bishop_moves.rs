//! Bishop shape rule: any unobstructed diagonal move.

use crate::game_state::chess_types::{Board, Square};
use crate::moves::sliding_moves::diagonal;

#[inline]
pub fn bishop_move_is_legal(board: &Board, source: Square, target: Square) -> bool {
    diagonal(board, source, target)
}

#[cfg(test)]
mod tests {
    use super::bishop_move_is_legal;
    use crate::game_state::chess_types::*;

    #[test]
    fn bishop_needs_open_diagonal() {
        let mut board = Board::starting_position();
        let f1 = Square::new(7, 5);
        let c4 = Square::new(4, 2);
        assert!(!bishop_move_is_legal(&board, f1, c4));

        board.set(Square::new(6, 4), None);
        assert!(bishop_move_is_legal(&board, f1, c4));
        assert!(!bishop_move_is_legal(&board, f1, Square::new(4, 5)));
    }
}
