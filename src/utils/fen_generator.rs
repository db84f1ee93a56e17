//! GameState-to-position-string writer.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Placement and side to move, padded with empty castling, en-passant, and
/// clock fields so standard FEN readers accept the output.
pub fn generate_fen(game_state: &GameState) -> String {
    let side_to_move = match game_state.turn() {
        Color::White => "w",
        Color::Black => "b",
    };

    format!("{} {} - - 0 1", generate_board_field(game_state.board()), side_to_move)
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for (row, squares) in board.rows().iter().enumerate() {
        let mut empty_count = 0u8;

        for square in squares {
            if let Some(piece) = square {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(*piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row + 1 < BOARD_SIZE {
            out.push('/');
        }
    }

    out
}

pub fn piece_to_fen_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}
