//! Remaining-piece bookkeeping for the elimination win condition.

use crate::game_state::chess_rules::INITIAL_PIECE_COUNTS;
use crate::game_state::chess_types::*;

/// Remaining pieces of one side, indexed by [`PieceKind::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCounts {
    counts: [u8; 6],
}

impl Default for PieceCounts {
    fn default() -> Self {
        Self::initial()
    }
}

impl PieceCounts {
    /// Full starting allotment.
    #[inline]
    pub const fn initial() -> Self {
        Self {
            counts: INITIAL_PIECE_COUNTS,
        }
    }

    /// Counts of `color`'s pieces currently on `board`.
    pub fn from_board(board: &Board, color: Color) -> Self {
        let mut counts = [0u8; 6];
        for (_, piece) in board.pieces() {
            if piece.color == color {
                counts[piece.kind.index()] = counts[piece.kind.index()].saturating_add(1);
            }
        }
        Self { counts }
    }

    #[inline]
    pub fn get(&self, kind: PieceKind) -> u8 {
        self.counts[kind.index()]
    }

    /// Record the capture of one `kind`. Returns the remaining count.
    #[inline]
    pub fn decrement(&mut self, kind: PieceKind) -> u8 {
        let slot = &mut self.counts[kind.index()];
        *slot = slot.saturating_sub(1);
        *slot
    }

    /// First kind with nothing left, if any.
    pub fn exhausted_kind(&self) -> Option<PieceKind> {
        ALL_PIECE_KINDS
            .into_iter()
            .find(|kind| self.counts[kind.index()] == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, u8)> + '_ {
        ALL_PIECE_KINDS
            .into_iter()
            .map(move |kind| (kind, self.counts[kind.index()]))
    }
}
