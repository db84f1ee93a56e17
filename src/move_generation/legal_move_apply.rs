//! Applying a validated move to the live game.
//!
//! The board, per-side counts, status, and turn are only ever touched here,
//! and only after [`check_move`] has accepted the move.

use log::{debug, trace};

use crate::errors::MoveRejection;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::check_move;

/// What an applied move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub status: GameStatus,
}

/// Validate and apply `source -> target` in place.
///
/// On rejection the game is left untouched.
pub fn apply_move(
    game_state: &mut GameState,
    source: Square,
    target: Square,
) -> Result<MoveOutcome, MoveRejection> {
    let piece = match check_move(game_state, source, target) {
        Ok(piece) => piece,
        Err(rejection) => {
            trace!("rejected {source}-{target}: {rejection}");
            return Err(rejection);
        }
    };

    let captured = game_state.board.relocate(source, target);
    if let Some(victim) = captured {
        let remaining = game_state.counts[victim.color.index()].decrement(victim.kind);
        debug!("{piece} on {target} captured {victim}, {remaining} left");
        if remaining == 0 {
            game_state.status = GameStatus::won_by(victim.color.opposite());
            debug!(
                "{} has no {}s left: {}",
                victim.color, victim.kind, game_state.status
            );
        }
    } else {
        debug!("{piece} moved {source}-{target}");
    }

    game_state.side_to_move = game_state.side_to_move.opposite();

    Ok(MoveOutcome {
        piece,
        from: source,
        to: target,
        captured,
        status: game_state.status,
    })
}
