//! Position-string parser.
//!
//! Reads FEN piece placement and side to move. Castling, en-passant, and clock
//! fields are optional and ignored, since the variant has none of those rules.

use crate::errors::PositionError;
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn parse_fen(fen: &str) -> Result<GameState, PositionError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(PositionError::MissingField("board layout"))?;
    let side_part = parts.next().ok_or(PositionError::MissingField("side to move"))?;

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;

    GameState::from_position(board, side_to_move)
}

fn parse_board(board_part: &str) -> Result<Board, PositionError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(PositionError::RankCount(ranks.len()));
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = BOARD_SIZE - row;
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(PositionError::PieceChar(ch));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(PositionError::PieceChar(ch))?;
            if col >= BOARD_SIZE {
                return Err(PositionError::RankWidth {
                    rank,
                    files: col + 1,
                });
            }

            board.set(Square::new(row, col), Some(piece));
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err(PositionError::RankWidth { rank, files: col });
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, PositionError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(PositionError::SideToMove(side_part.to_owned())),
    }
}

pub fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
