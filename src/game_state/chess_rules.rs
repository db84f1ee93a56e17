//! Canonical rule constants for the elimination variant.
//!
//! Starting layout, pawn start rows, and the per-side piece allotment that the
//! win condition counts down from.

use crate::game_state::chess_types::{Color, PieceKind};

/// Standard chess starting position as a position string.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

/// Back rank layout from file `a` to file `h`, shared by both colors.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Pieces each side starts with, indexed by [`PieceKind::index`].
pub const INITIAL_PIECE_COUNTS: [u8; 6] = [8, 2, 2, 2, 1, 1];

#[inline]
pub const fn back_rank_row(color: Color) -> usize {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Row a pawn of `color` starts on; only here may it advance two squares.
#[inline]
pub const fn pawn_start_row(color: Color) -> usize {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

#[inline]
pub const fn initial_count(kind: PieceKind) -> u8 {
    INITIAL_PIECE_COUNTS[kind.index()]
}
