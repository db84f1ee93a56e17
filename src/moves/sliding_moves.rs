//! Line movement shared by rooks, bishops, and queens.
//!
//! Each primitive checks its axis, then walks from the square after `source`
//! toward `target`. Every square strictly between the two must be empty; the
//! target itself may hold anything (ownership is checked elsewhere).

use crate::game_state::chess_types::{Board, Square};

/// Same column, different row, nothing in between.
#[inline]
pub fn vertical(board: &Board, source: Square, target: Square) -> bool {
    let (d_row, d_col) = source.delta_to(target);
    d_col == 0 && d_row != 0 && trace_ray(board, source, target, d_row.signum(), 0)
}

/// Same row, different column, nothing in between.
#[inline]
pub fn horizontal(board: &Board, source: Square, target: Square) -> bool {
    let (d_row, d_col) = source.delta_to(target);
    d_row == 0 && d_col != 0 && trace_ray(board, source, target, 0, d_col.signum())
}

/// `|d_row| == |d_col| > 0`, nothing in between.
#[inline]
pub fn diagonal(board: &Board, source: Square, target: Square) -> bool {
    let (d_row, d_col) = source.delta_to(target);
    d_row != 0
        && d_row.abs() == d_col.abs()
        && trace_ray(board, source, target, d_row.signum(), d_col.signum())
}

fn trace_ray(board: &Board, source: Square, target: Square, row_step: i32, col_step: i32) -> bool {
    let mut current = source;
    while let Some(next) = current.offset(row_step, col_step) {
        if next == target {
            return true;
        }
        if !board.is_empty(next) {
            return false;
        }
        current = next;
    }
    false
}
