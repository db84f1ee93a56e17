//! Engine-level move validation.
//!
//! Conditions are evaluated in a fixed order and the first failure is
//! reported: off-board squares, empty source, wrong side, friendly target,
//! finished game, and finally the piece's own shape rule.

use crate::errors::MoveRejection;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::piece_rules::is_legal_shape;

/// Validate moving whatever stands on `source` to `target`.
///
/// Returns the moving piece when the move is legal. Never mutates.
pub fn check_move(
    game_state: &GameState,
    source: Square,
    target: Square,
) -> Result<Piece, MoveRejection> {
    if !source.is_on_board() {
        return Err(MoveRejection::OffBoard(source));
    }
    if !target.is_on_board() {
        return Err(MoveRejection::OffBoard(target));
    }

    let board = game_state.board();
    let side = game_state.turn();

    let Some(piece) = board.piece_at(source) else {
        return Err(MoveRejection::EmptySource(source));
    };
    if piece.color != side {
        return Err(MoveRejection::WrongTurn(source));
    }
    if board.piece_at(target).is_some_and(|occupant| occupant.color == side) {
        return Err(MoveRejection::FriendlyFire(target));
    }
    if game_state.status().is_over() {
        return Err(MoveRejection::GameOver);
    }
    if !is_legal_shape(board, piece, source, target) {
        return Err(MoveRejection::IllegalShape {
            from: source,
            to: target,
        });
    }

    Ok(piece)
}
