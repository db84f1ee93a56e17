//! Shape-legality dispatch over the closed set of piece kinds.

use crate::game_state::chess_types::{Board, Piece, PieceKind, Square};
use crate::moves::bishop_moves::bishop_move_is_legal;
use crate::moves::king_moves::king_move_is_legal;
use crate::moves::knight_moves::knight_move_is_legal;
use crate::moves::pawn_moves::pawn_move_is_legal;
use crate::moves::queen_moves::queen_move_is_legal;
use crate::moves::rook_moves::rook_move_is_legal;

/// Whether `piece`, standing on `source`, may move to `target` on `board`.
///
/// Turn order, friendly targets, and game-over state are not considered here.
pub fn is_legal_shape(board: &Board, piece: Piece, source: Square, target: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_move_is_legal(board, piece.color, source, target),
        PieceKind::Knight => knight_move_is_legal(board, source, target),
        PieceKind::Bishop => bishop_move_is_legal(board, source, target),
        PieceKind::Rook => rook_move_is_legal(board, source, target),
        PieceKind::Queen => queen_move_is_legal(board, source, target),
        PieceKind::King => king_move_is_legal(board, source, target),
    }
}
