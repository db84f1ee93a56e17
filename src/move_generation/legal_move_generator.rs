//! Legal move listing for the side to move.
//!
//! Every candidate goes through the same [`check_move`] the engine uses, so the
//! list is exactly the set of moves `apply_move` would accept.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::check_move;

/// All `(source, target)` pairs the side to move may play, in board order.
///
/// Empty once the game is over.
pub fn generate_legal_moves(game_state: &GameState) -> Vec<(Square, Square)> {
    let mut legal = Vec::with_capacity(64);
    if game_state.status().is_over() {
        return legal;
    }

    let side = game_state.turn();
    for (source, _) in game_state
        .board()
        .pieces()
        .filter(|(_, piece)| piece.color == side)
    {
        for target in Square::all() {
            if check_move(game_state, source, target).is_ok() {
                legal.push((source, target));
            }
        }
    }

    legal
}

/// Legal targets for the piece on `source`, empty if it cannot move now.
pub fn legal_targets_from(game_state: &GameState, source: Square) -> Vec<Square> {
    Square::all()
        .filter(|&target| check_move(game_state, source, target).is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{generate_legal_moves, legal_targets_from};
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    #[test]
    fn twenty_opening_moves_for_each_side() {
        let mut game = GameState::new_game();
        assert_eq!(generate_legal_moves(&game).len(), 20);
        assert!(game.apply_move("e2", "e4"));
        assert_eq!(generate_legal_moves(&game).len(), 20);
    }

    #[test]
    fn every_listed_move_applies() {
        let game = GameState::new_game();
        for (from, to) in generate_legal_moves(&game) {
            let mut copy = game.clone();
            assert!(copy.apply_move_squares(from, to).is_ok(), "{from}-{to}");
        }
    }

    #[test]
    fn targets_from_a_single_square() {
        let game = GameState::new_game();
        assert_eq!(legal_targets_from(&game, sq("g1")), vec![sq("f3"), sq("h3")]);
        assert!(legal_targets_from(&game, sq("e7")).is_empty());
        assert!(legal_targets_from(&game, sq("e4")).is_empty());
    }
}
