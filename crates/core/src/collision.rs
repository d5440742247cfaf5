//! Collision detection against board boundaries and the settled stack.

use crate::board::Board;
use crate::shapes::cells_of;
use crate::types::PieceKind;

/// Test whether a piece placed at `(row, col)` would overlap anything.
///
/// A mino collides when it falls outside `[0, rows) x [0, cols)` or lands on
/// a filled cell. Pure: safe to call speculatively on candidate positions.
pub fn collides(board: &Board, kind: PieceKind, rotation: usize, row: i8, col: i8) -> bool {
    cells_of(kind, rotation).iter().any(|&(dr, dc)| {
        let (Some(r), Some(c)) = (row.checked_add(dr), col.checked_add(dc)) else {
            return true;
        };
        board.is_out_of_bounds(r, c) || board.is_filled(r, c)
    })
}
