//! 8x8 mailbox board.
//!
//! The board exclusively owns the pieces standing on it. Moving a piece hands
//! it from one square to another; a capture drops the piece that was on the
//! target square.

use crate::game_state::chess_rules::{back_rank_row, pawn_start_row, BACK_RANK};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard chess starting position.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let back = back_rank_row(color);
            let pawns = pawn_start_row(color);
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.squares[back][col] = Some(Piece::new(color, *kind));
                board.squares[pawns][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        board
    }

    /// Piece on `square`, or `None` if empty or off the board.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares
            .get(square.row)
            .and_then(|row| row.get(square.col))
            .copied()
            .flatten()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Place `piece` on `square`, returning whatever stood there before.
    ///
    /// Panics if `square` is off the board.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[square.row][square.col], piece)
    }

    /// Move the piece on `from` to `to`. Returns the piece displaced from `to`.
    ///
    /// Both squares must be on the board.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.set(from, None);
        self.set(to, moving)
    }

    /// Rows from row 0 (rank 8) down to row 7 (rank 1).
    #[inline]
    pub fn rows(&self) -> &[[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces()
            .filter(|(_, piece)| piece.color == color && piece.kind == kind)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_thirty_two_pieces() {
        let board = Board::starting_position();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.count(Color::White, PieceKind::Pawn), 8);
        assert_eq!(board.count(Color::Black, PieceKind::Queen), 1);
        assert_eq!(
            board.piece_at(Square::new(7, 4)),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(Square::new(0, 3)),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        for row in 2..6 {
            for col in 0..BOARD_SIZE {
                assert!(board.is_empty(Square::new(row, col)));
            }
        }
    }

    #[test]
    fn relocate_returns_displaced_piece() {
        let mut board = Board::empty();
        let rook = Piece::new(Color::White, PieceKind::Rook);
        let knight = Piece::new(Color::Black, PieceKind::Knight);
        board.set(Square::new(4, 0), Some(rook));
        board.set(Square::new(4, 5), Some(knight));

        let captured = board.relocate(Square::new(4, 0), Square::new(4, 5));

        assert_eq!(captured, Some(knight));
        assert!(board.is_empty(Square::new(4, 0)));
        assert_eq!(board.piece_at(Square::new(4, 5)), Some(rook));
    }

    #[test]
    fn off_board_lookup_is_empty() {
        let board = Board::starting_position();
        assert_eq!(board.piece_at(Square::new(8, 0)), None);
        assert_eq!(board.piece_at(Square::new(0, 9)), None);
    }
}
