//! Pawn shape rule.
//!
//! White pawns advance toward row 0 and black pawns toward row 7. A pawn
//! captures one square diagonally forward, advances one square onto an empty
//! square, or two squares from its start row when both squares ahead are
//! empty. It never captures straight ahead and never promotes.

use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::{Board, Color, Square};

pub fn pawn_move_is_legal(board: &Board, color: Color, source: Square, target: Square) -> bool {
    let forward = color.forward();
    let (d_row, d_col) = source.delta_to(target);

    if d_row == forward && d_col.abs() == 1 {
        return board
            .piece_at(target)
            .is_some_and(|occupant| occupant.color != color);
    }

    if d_col != 0 {
        return false;
    }

    if d_row == forward {
        return board.is_empty(target);
    }

    if d_row == 2 * forward && source.row == pawn_start_row(color) {
        let Some(between) = source.offset(forward, 0) else {
            return false;
        };
        return board.is_empty(between) && board.is_empty(target);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::pawn_move_is_legal;
    use crate::game_state::chess_types::*;

    fn sq(text: &str) -> Square {
        crate::utils::algebraic::algebraic_to_square(text).expect("test square should parse")
    }

    #[test]
    fn pawns_advance_one_or_two_from_start() {
        let board = Board::starting_position();
        assert!(pawn_move_is_legal(&board, Color::White, sq("e2"), sq("e3")));
        assert!(pawn_move_is_legal(&board, Color::White, sq("e2"), sq("e4")));
        assert!(!pawn_move_is_legal(&board, Color::White, sq("e2"), sq("e5")));
        assert!(pawn_move_is_legal(&board, Color::Black, sq("d7"), sq("d6")));
        assert!(pawn_move_is_legal(&board, Color::Black, sq("d7"), sq("d5")));
    }

    #[test]
    fn pawns_never_move_backward_or_sideways() {
        let mut board = Board::empty();
        board.set(sq("e4"), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert!(!pawn_move_is_legal(&board, Color::White, sq("e4"), sq("e3")));
        assert!(!pawn_move_is_legal(&board, Color::White, sq("e4"), sq("f4")));
        assert!(!pawn_move_is_legal(&board, Color::White, sq("e4"), sq("e4")));
        assert!(!pawn_move_is_legal(&board, Color::Black, sq("e4"), sq("e5")));
    }

    #[test]
    fn double_step_only_from_start_row() {
        let mut board = Board::empty();
        board.set(sq("e3"), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert!(!pawn_move_is_legal(&board, Color::White, sq("e3"), sq("e5")));
        assert!(pawn_move_is_legal(&board, Color::White, sq("e3"), sq("e4")));
    }

    #[test]
    fn double_step_needs_both_squares_empty() {
        let mut board = Board::starting_position();
        board.set(sq("e3"), Some(Piece::new(Color::Black, PieceKind::Knight)));
        assert!(!pawn_move_is_legal(&board, Color::White, sq("e2"), sq("e4")));

        let mut board = Board::starting_position();
        board.set(sq("e4"), Some(Piece::new(Color::Black, PieceKind::Knight)));
        assert!(!pawn_move_is_legal(&board, Color::White, sq("e2"), sq("e4")));
        assert!(pawn_move_is_legal(&board, Color::White, sq("e2"), sq("e3")));
    }

    #[test]
    fn pawn_captures_only_diagonally_and_only_enemies() {
        let mut board = Board::starting_position();
        board.set(sq("d3"), Some(Piece::new(Color::Black, PieceKind::Bishop)));
        board.set(sq("f3"), Some(Piece::new(Color::White, PieceKind::Knight)));
        board.set(sq("e3"), Some(Piece::new(Color::Black, PieceKind::Rook)));

        assert!(pawn_move_is_legal(&board, Color::White, sq("e2"), sq("d3")));
        assert!(!pawn_move_is_legal(&board, Color::White, sq("e2"), sq("f3")));
        assert!(!pawn_move_is_legal(&board, Color::White, sq("e2"), sq("e3")));
        assert!(!pawn_move_is_legal(&board, Color::White, sq("c2"), sq("b3")));
    }

    #[test]
    fn black_pawn_captures_toward_row_seven() {
        let mut board = Board::starting_position();
        board.set(sq("c6"), Some(Piece::new(Color::White, PieceKind::Queen)));
        assert!(pawn_move_is_legal(&board, Color::Black, sq("b7"), sq("c6")));
        assert!(pawn_move_is_legal(&board, Color::Black, sq("d7"), sq("c6")));
        assert!(!pawn_move_is_legal(&board, Color::Black, sq("c7"), sq("c6")));
    }

    #[test]
    fn pawn_on_last_rank_stays_a_pawn_with_no_moves() {
        let mut board = Board::empty();
        board.set(sq("a8"), Some(Piece::new(Color::White, PieceKind::Pawn)));
        let moves = Square::all()
            .filter(|&target| pawn_move_is_legal(&board, Color::White, sq("a8"), target))
            .count();
        assert_eq!(moves, 0);
    }
}
