//! Seeded random playouts.
//!
//! Plays uniformly random legal moves until the game is decided or a ply limit
//! is reached. Used by tests and benchmarks to drive the engine through many
//! varied positions.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::errors::MoveRejection;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::MoveOutcome;

#[derive(Debug, Clone)]
pub struct PlayoutReport {
    pub final_state: GameState,
    pub plies: usize,
    pub captures: usize,
    pub moves: Vec<MoveOutcome>,
}

impl PlayoutReport {
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.final_state.status()
    }
}

/// Play from `start` until the game ends, no move is available, or `max_plies`
/// moves have been made.
pub fn random_playout<R: Rng + ?Sized>(
    start: &GameState,
    max_plies: usize,
    rng: &mut R,
) -> Result<PlayoutReport, MoveRejection> {
    let mut game = start.clone();
    let mut moves = Vec::new();
    let mut captures = 0;

    while moves.len() < max_plies && !game.status().is_over() {
        let legal = game.legal_moves();
        let Some(&(from, to)) = legal.choose(rng) else {
            break;
        };

        let outcome = game.apply_move_squares(from, to)?;
        if outcome.captured.is_some() {
            captures += 1;
        }
        moves.push(outcome);
    }

    debug!(
        "playout finished after {} plies with {} captures: {}",
        moves.len(),
        captures,
        game.status()
    );

    Ok(PlayoutReport {
        plies: moves.len(),
        captures,
        final_state: game,
        moves,
    })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::random_playout;
    use crate::game_state::chess_types::*;

    fn random_square(rng: &mut StdRng) -> Square {
        Square::new(rng.random_range(0..BOARD_SIZE), rng.random_range(0..BOARD_SIZE))
    }

    #[test]
    fn playout_is_reproducible_for_a_seed() {
        let start = GameState::new_game();
        let first = random_playout(&start, 200, &mut StdRng::seed_from_u64(11)).expect("playout");
        let second = random_playout(&start, 200, &mut StdRng::seed_from_u64(11)).expect("playout");
        assert_eq!(first.final_state, second.final_state);
        assert_eq!(first.moves, second.moves);
    }

    #[test]
    fn playouts_preserve_engine_invariants() {
        for seed in 0..40u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let report = random_playout(&GameState::new_game(), 300, &mut rng).expect("playout");

            let mut replay = GameState::new_game();
            for (ply, outcome) in report.moves.iter().enumerate() {
                let expected_side = if ply % 2 == 0 { Color::White } else { Color::Black };
                assert_eq!(replay.turn(), expected_side);
                assert_eq!(outcome.piece.color, expected_side);

                let counts_before = [
                    *replay.piece_counts(Color::White),
                    *replay.piece_counts(Color::Black),
                ];
                let replayed = replay
                    .apply_move_squares(outcome.from, outcome.to)
                    .expect("recorded move should replay");
                assert_eq!(&replayed, outcome);

                for color in [Color::White, Color::Black] {
                    for kind in ALL_PIECE_KINDS {
                        let before = counts_before[color.index()].get(kind);
                        let after = replay.piece_counts(color).get(kind);
                        let captured_here = outcome.captured == Some(Piece::new(color, kind));
                        assert_eq!(before - after, u8::from(captured_here));
                        assert_eq!(usize::from(after), replay.board().count(color, kind));
                    }
                }

                if ply + 1 < report.moves.len() {
                    assert_eq!(replay.status(), GameStatus::InProgress);
                }
            }

            assert_eq!(replay, report.final_state);
        }
    }

    #[test]
    fn win_is_declared_exactly_when_a_kind_runs_out() {
        for seed in 0..40u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let report = random_playout(&GameState::new_game(), 1_000, &mut rng).expect("playout");
            let game = &report.final_state;
            assert_eq!(report.status(), game.status());

            let white_out = game.piece_counts(Color::White).exhausted_kind().is_some();
            let black_out = game.piece_counts(Color::Black).exhausted_kind().is_some();
            match game.status() {
                GameStatus::InProgress => assert!(!white_out && !black_out),
                GameStatus::WhiteWon => assert!(black_out && !white_out),
                GameStatus::BlackWon => assert!(white_out && !black_out),
            }

            if game.status().is_over() {
                let last = report.moves.last().expect("a decided game has moves");
                assert!(last.captured.is_some());
                assert_eq!(
                    Some(last.piece.color),
                    game.status().winner(),
                    "the capturing side wins"
                );
            }
        }
    }

    #[test]
    fn rejected_attempts_never_mutate() {
        let mut rng = StdRng::seed_from_u64(99);
        let report = random_playout(&GameState::new_game(), 60, &mut rng).expect("playout");
        let mut game = report.final_state;
        let legal = game.legal_moves();

        for _ in 0..2_000 {
            let from = random_square(&mut rng);
            let to = random_square(&mut rng);
            if legal.contains(&(from, to)) {
                continue;
            }
            let before = game.clone();
            assert!(game.apply_move_squares(from, to).is_err());
            assert_eq!(game, before);
        }
    }
}
