//! Square conversions for algebraic coordinates.
//!
//! Files `a`-`h` map to columns 0-7 left to right. Ranks map top-down, so
//! rank 8 is row 0 and rank 1 is row 7.

use crate::errors::NotationError;
use crate::game_state::chess_types::{Square, BOARD_SIZE};

/// Convert algebraic notation (for example: "e4") to a board square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, NotationError> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(NotationError::WrongLength(square.to_owned()));
    };

    let file_lower = file.to_ascii_lowercase();
    if !('a'..='h').contains(&file_lower) {
        return Err(NotationError::InvalidFile(file));
    }
    if !('1'..='8').contains(&rank) {
        return Err(NotationError::InvalidRank(rank));
    }

    let col = (file_lower as u8 - b'a') as usize;
    let rank_index = (rank as u8 - b'1') as usize;
    Ok(Square::new(BOARD_SIZE - 1 - rank_index, col))
}

/// Convert a board square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, NotationError> {
    if !square.is_on_board() {
        return Err(NotationError::OffBoard {
            row: square.row,
            col: square.col,
        });
    }

    let file_char = char::from(b'a' + square.col as u8);
    let rank_char = char::from(b'1' + (BOARD_SIZE - 1 - square.row) as u8);
    Ok(format!("{file_char}{rank_char}"))
}

/// Split a move like `"e2e4"`, `"e2 e4"`, or `"e2-e4"` into its two squares.
pub fn parse_move_pair(text: &str) -> Result<(Square, Square), NotationError> {
    let compact: Vec<char> = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    let [from_file, from_rank, to_file, to_rank] = compact[..] else {
        return Err(NotationError::WrongLength(text.trim().to_owned()));
    };
    let from: String = [from_file, from_rank].iter().collect();
    let to: String = [to_file, to_rank].iter().collect();
    Ok((algebraic_to_square(&from)?, algebraic_to_square(&to)?))
}
