//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for the CLI, tests, and diagnostics.
//! Rank 8 is printed first, matching the board's row order.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::fen_generator::piece_to_fen_char;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    #[default]
    Unicode,
    /// FEN letters, uppercase for white, `.` for empty squares.
    Ascii,
}

/// Render the board with file letters above and below and rank digits on both sides.
pub fn render_game_state(game_state: &GameState, style: RenderStyle) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for (row, squares) in game_state.board().rows().iter().enumerate() {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for (col, square) in squares.iter().enumerate() {
            out.push(match (square, style) {
                (Some(piece), RenderStyle::Unicode) => piece_to_unicode(*piece),
                (Some(piece), RenderStyle::Ascii) => piece_to_fen_char(*piece),
                (None, RenderStyle::Unicode) => '·',
                (None, RenderStyle::Ascii) => '.',
            });

            if col + 1 < BOARD_SIZE {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
