//! Landing module - commits a piece to the board and scores line clears
//!
//! Scoring is 100 points per cleared line plus a flat bonus for multi-line
//! clears (see [`MULTI_LINE_BONUS`]). Hard-drop distance points are awarded
//! by the caller, not here.

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::types::{Cell, LINE_SCORE, MULTI_LINE_BONUS};

/// What a single landing did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LandOutcome {
    pub lines_cleared: u32,
    /// Points for the clear (base + bonus)
    pub score: u32,
}

/// Score for clearing `lines` rows in one landing.
///
/// | Lines | Points |
/// |-------|--------|
/// | 0 | 0 |
/// | 1 | 100 |
/// | 2 | 300 |
/// | 3 | 600 |
/// | 4 | 1200 |
pub fn line_clear_score(lines: u32) -> u32 {
    let bonus = MULTI_LINE_BONUS
        .get(lines as usize)
        .copied()
        .unwrap_or(0);
    lines.saturating_mul(LINE_SCORE).saturating_add(bonus)
}

/// Write the piece into the board, then clear and compact full rows.
///
/// Minos outside the board are skipped, never written.
pub fn land(board: &mut Board, piece: &ActivePiece) -> LandOutcome {
    for (row, col) in piece.cells() {
        board.set(row, col, Cell::Filled);
    }

    let lines_cleared = board.clear_full_rows();
    LandOutcome {
        lines_cleared,
        score: line_clear_score(lines_cleared),
    }
}
