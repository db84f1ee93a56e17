//! Core value types shared by the rule set and the engine.
//!
//! Colors, piece kinds, pieces, board squares, and the game status are all
//! small `Copy` values; the board and counts that hold them live in their
//! own modules.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::piece_counts::PieceCounts;

/// Board edge length.
pub const BOARD_SIZE: usize = 8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step a pawn of this color takes when advancing.
    ///
    /// White starts on rows 6-7 and advances toward row 0.
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind (color is carried separately on [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A colored piece. Two pieces with equal color and kind are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

/// Board coordinate. Row 0 is rank 8 (black's back rank), column 0 is file `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `None` when either index falls outside the board.
    #[inline]
    pub const fn checked(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Step by a signed row/column delta, staying on the board.
    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        let row = self.row as i32 + d_row;
        let col = self.col as i32 + d_col;
        if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
            Some(Self::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Signed `(target.row - self.row, target.col - self.col)`.
    #[inline]
    pub fn delta_to(self, target: Square) -> (i32, i32) {
        (
            target.row as i32 - self.row as i32,
            target.col as i32 - self.col as i32,
        )
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::utils::algebraic::square_to_algebraic(*self) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// Outcome of the game so far. Won states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    WhiteWon,
    BlackWon,
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Status reached when `color` wins.
    #[inline]
    pub const fn won_by(color: Color) -> Self {
        match color {
            Color::White => GameStatus::WhiteWon,
            Color::Black => GameStatus::BlackWon,
        }
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::WhiteWon => Some(Color::White),
            GameStatus::BlackWon => Some(Color::Black),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::WhiteWon => write!(f, "white won"),
            GameStatus::BlackWon => write!(f, "black won"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stays_on_board() {
        let a8 = Square::new(0, 0);
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(0, -1), None);
        assert_eq!(a8.offset(1, 2), Some(Square::new(1, 2)));

        let h1 = Square::new(7, 7);
        assert_eq!(h1.offset(1, 0), None);
        assert_eq!(h1.offset(-7, -7), Some(a8));

        assert_eq!(Square::checked(7, 7), Some(h1));
        assert_eq!(Square::checked(8, 0), None);
        assert_eq!(Square::checked(0, usize::MAX), None);
    }

    #[test]
    fn all_squares_cover_board_in_row_major_order() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0));
        assert_eq!(squares[9], Square::new(1, 1));
        assert_eq!(squares[63], Square::new(7, 7));
    }

    #[test]
    fn status_winner_mapping() {
        assert_eq!(GameStatus::won_by(Color::White), GameStatus::WhiteWon);
        assert_eq!(GameStatus::BlackWon.winner(), Some(Color::Black));
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::WhiteWon.is_over());
    }
}
