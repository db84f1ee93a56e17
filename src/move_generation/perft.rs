//! Exhaustive game-tree counting under the elimination rules.
//!
//! Positions that are already won have no moves, so a branch that ends the
//! game contributes nothing below the depth at which it ended.

use crate::errors::MoveRejection;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub wins: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.wins += rhs.wins;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> Result<PerftCounts, MoveRejection> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for (from, to) in generate_legal_moves(game_state) {
        total.merge(perft_recurse(game_state, from, to, depth)?);
    }
    Ok(total)
}

/// Leaf counts split by root move.
pub fn perft_divide(
    game_state: &GameState,
    depth: u8,
) -> Result<Vec<((Square, Square), PerftCounts)>, MoveRejection> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    let mut divided = Vec::new();
    for (from, to) in generate_legal_moves(game_state) {
        divided.push(((from, to), perft_recurse(game_state, from, to, depth)?));
    }
    Ok(divided)
}

fn perft_recurse(
    game_state: &GameState,
    from: Square,
    to: Square,
    depth: u8,
) -> Result<PerftCounts, MoveRejection> {
    let mut next = game_state.clone();
    let outcome = next.apply_move_squares(from, to)?;

    if depth == 1 {
        return Ok(PerftCounts {
            nodes: 1,
            captures: u64::from(outcome.captured.is_some()),
            wins: u64::from(outcome.status.is_over()),
        });
    }

    perft(&next, depth - 1)
}
