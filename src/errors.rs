//! Error and rejection types used across the crate.
//!
//! The engine's public move API keeps a plain `bool` contract; these types are
//! the reason codes behind a `false`, returned by the `try_`/`check_`
//! variants for diagnostics and user feedback.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Malformed algebraic coordinate such as `"z9"` or `"e10"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("square `{0}` must be a file letter followed by a rank digit")]
    WrongLength(String),
    #[error("invalid file `{0}`, expected a-h")]
    InvalidFile(char),
    #[error("invalid rank `{0}`, expected 1-8")]
    InvalidRank(char),
    #[error("square ({row}, {col}) is off the board")]
    OffBoard { row: usize, col: usize },
}

/// Why a move was refused. Checked in declaration order; the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("square {0:?} is off the board")]
    OffBoard(Square),
    #[error("no piece on {0}")]
    EmptySource(Square),
    #[error("the piece on {0} belongs to the side not on move")]
    WrongTurn(Square),
    #[error("{0} is occupied by a piece of the side on move")]
    FriendlyFire(Square),
    #[error("the game is already over")]
    GameOver,
    #[error("that piece cannot move from {from} to {to}")]
    IllegalShape { from: Square, to: Square },
}

/// Failure of a move given in algebraic notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error(transparent)]
    Notation(#[from] NotationError),
    #[error(transparent)]
    Rejected(#[from] MoveRejection),
}

/// Failure to read a position string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("position is missing the {0} field")]
    MissingField(&'static str),
    #[error("board layout must contain 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank} describes {files} files instead of 8")]
    RankWidth { rank: usize, files: usize },
    #[error("invalid piece character `{0}`")]
    PieceChar(char),
    #[error("invalid side to move `{0}`, expected `w` or `b`")]
    SideToMove(String),
    #[error("{color} has more {kind}s than the starting allotment")]
    TooManyPieces { color: Color, kind: PieceKind },
}
