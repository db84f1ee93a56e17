//! The game engine.
//!
//! `GameState` owns the board, the per-side piece counts, the side to move, and
//! the game status. Every mutation goes through
//! [`legal_move_apply::apply_move`](crate::move_generation::legal_move_apply::apply_move);
//! rejected moves leave all four untouched.

use crate::errors::{MoveError, MoveRejection, PositionError};
use crate::game_state::chess_rules::initial_count;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{self, MoveOutcome};
use crate::move_generation::legal_move_checks::check_move;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::{render_game_state, RenderStyle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    // [color]
    pub(crate) counts: [PieceCounts; 2],
    pub(crate) side_to_move: Color,
    pub(crate) status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, white to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            counts: [PieceCounts::initial(), PieceCounts::initial()],
            side_to_move: Color::White,
            status: GameStatus::InProgress,
        }
    }

    /// Start from an arbitrary arrangement.
    ///
    /// Counts are taken from the pieces on `board`. A side already missing a
    /// whole kind has lost, exactly as if that kind had just been captured.
    pub fn from_position(board: Board, side_to_move: Color) -> Result<Self, PositionError> {
        for color in [Color::White, Color::Black] {
            for kind in ALL_PIECE_KINDS {
                if board.count(color, kind) > usize::from(initial_count(kind)) {
                    return Err(PositionError::TooManyPieces { color, kind });
                }
            }
        }

        let counts = [
            PieceCounts::from_board(&board, Color::White),
            PieceCounts::from_board(&board, Color::Black),
        ];

        let mut status = GameStatus::InProgress;
        if counts[Color::White.index()].exhausted_kind().is_some() {
            status = GameStatus::BlackWon;
        }
        if counts[Color::Black.index()].exhausted_kind().is_some() {
            status = GameStatus::WhiteWon;
        }

        Ok(Self {
            board,
            counts,
            side_to_move,
            status,
        })
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_counts(&self, color: Color) -> &PieceCounts {
        &self.counts[color.index()]
    }

    /// Move the piece on `source` to `target`, both in algebraic notation.
    ///
    /// Returns `false` for malformed notation and for any illegal move; the
    /// game is unchanged in both cases.
    pub fn apply_move(&mut self, source: &str, target: &str) -> bool {
        self.try_apply_move(source, target).is_ok()
    }

    /// Like [`apply_move`](Self::apply_move), but reports why a move failed.
    pub fn try_apply_move(&mut self, source: &str, target: &str) -> Result<MoveOutcome, MoveError> {
        let source = algebraic_to_square(source)?;
        let target = algebraic_to_square(target)?;
        Ok(self.apply_move_squares(source, target)?)
    }

    pub fn apply_move_squares(
        &mut self,
        source: Square,
        target: Square,
    ) -> Result<MoveOutcome, MoveRejection> {
        legal_move_apply::apply_move(self, source, target)
    }

    /// Whether moving `(source_row, source_col)` to `(target_row, target_col)`
    /// would be accepted right now.
    pub fn validate(
        &self,
        source_row: usize,
        source_col: usize,
        target_row: usize,
        target_col: usize,
    ) -> bool {
        match (
            Square::checked(source_row, source_col),
            Square::checked(target_row, target_col),
        ) {
            (Some(source), Some(target)) => self.check_move(source, target).is_ok(),
            _ => false,
        }
    }

    pub fn check_move(&self, source: Square, target: Square) -> Result<(), MoveRejection> {
        check_move(self, source, target).map(|_| ())
    }

    /// Every `(source, target)` the side to move may play.
    pub fn legal_moves(&self) -> Vec<(Square, Square)> {
        generate_legal_moves(self)
    }

    /// Unicode board dump for diagnostics.
    pub fn render(&self) -> String {
        render_game_state(self, RenderStyle::Unicode)
    }
}
