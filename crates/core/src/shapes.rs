//! Shapes module - the tetromino catalog
//!
//! Every piece kind maps to a fixed, non-empty table of rotation states.
//! A rotation state is four `(row, col)` offsets measured from the piece anchor
//! (the top-left corner of its bounding box). Rotation indices wrap modulo the
//! number of states, so stepping `rotation_count` times returns to the start.

use crate::types::PieceKind;

/// Offset of a single mino relative to the piece anchor, as `(row, col)`
pub type MinoOffset = (i8, i8);

/// One rotation state - 4 mino offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

const I_STATES: [PieceShape; 2] = [
    [(0, 0), (0, 1), (0, 2), (0, 3)],
    [(0, 0), (1, 0), (2, 0), (3, 0)],
];

// J turns counter-clockwise while L turns clockwise.
const J_STATES: [PieceShape; 4] = [
    [(0, 0), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 0), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (0, 2), (1, 1), (2, 1)],
];

const L_STATES: [PieceShape; 4] = [
    [(0, 2), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (1, 2), (2, 0)],
    [(0, 0), (0, 1), (1, 1), (2, 1)],
];

// O has a single state; rotating it is always a successful no-op.
const O_STATES: [PieceShape; 1] = [[(0, 0), (0, 1), (1, 0), (1, 1)]];

const S_STATES: [PieceShape; 2] = [
    [(0, 1), (0, 2), (1, 0), (1, 1)],
    [(0, 0), (1, 0), (1, 1), (2, 1)],
];

const T_STATES: [PieceShape; 4] = [
    [(0, 1), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (1, 2), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 1)],
    [(0, 1), (1, 0), (1, 1), (2, 1)],
];

const Z_STATES: [PieceShape; 2] = [
    [(0, 0), (0, 1), (1, 1), (1, 2)],
    [(0, 2), (1, 1), (1, 2), (2, 1)],
];

/// All rotation states of a piece kind, in rotation order.
pub fn rotation_states(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::Z => &Z_STATES,
    }
}

/// Number of distinct rotation states for a kind (always at least 1)
pub fn rotation_count(kind: PieceKind) -> usize {
    rotation_states(kind).len()
}

/// Get the mino offsets for a kind and rotation index.
///
/// The index is taken modulo [`rotation_count`], so any `usize` is accepted.
pub fn cells_of(kind: PieceKind, rotation: usize) -> PieceShape {
    let states = rotation_states(kind);
    states[rotation % states.len()]
}

/// Rotation index that follows `rotation`, wrapping back to 0.
pub fn next_rotation(kind: PieceKind, rotation: usize) -> usize {
    (rotation + 1) % rotation_count(kind)
}

/// Anchor column that horizontally centers the rotation-0 bounding box.
pub fn spawn_col(kind: PieceKind, cols: u8) -> i8 {
    let shape = cells_of(kind, 0);
    let min_c = shape.iter().map(|&(_, c)| c).min().unwrap_or(0);
    let max_c = shape.iter().map(|&(_, c)| c).max().unwrap_or(0);
    let width = max_c - min_c + 1;
    (cols as i8 - width) / 2 - min_c
}
