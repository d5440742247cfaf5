//! Active piece - the falling tetromino and its candidate moves.
//!
//! Every method here is a proposal: it returns the new placement only if it
//! does not collide, and leaves committing to the caller.

use crate::board::Board;
use crate::collision::collides;
use crate::shapes::{cells_of, next_rotation, spawn_col, PieceShape};
use crate::types::{PieceKind, BOARD_COLS};

/// Column offsets tried, in order, when a rotation collides in place.
const WALL_KICKS: [i8; 3] = [0, -1, 1];

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: usize,
    pub row: i8,
    pub col: i8,
}

impl ActivePiece {
    /// Create a piece at row 0, rotation 0, horizontally centered
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            row: 0,
            col: spawn_col(kind, BOARD_COLS),
        }
    }

    /// Mino offsets for the current rotation
    pub fn shape(&self) -> PieceShape {
        cells_of(self.kind, self.rotation)
    }

    /// Absolute (row, col) of each mino
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape()
            .map(|(dr, dc)| (self.row.saturating_add(dr), self.col.saturating_add(dc)))
    }

    pub fn collides(&self, board: &Board) -> bool {
        collides(board, self.kind, self.rotation, self.row, self.col)
    }

    /// Same piece moved by (dr, dc), without any validity check
    pub fn shifted(&self, dr: i8, dc: i8) -> Self {
        Self {
            row: self.row.saturating_add(dr),
            col: self.col.saturating_add(dc),
            ..*self
        }
    }

    /// Propose a move by (dr, dc). None if the target collides.
    pub fn try_shift(&self, board: &Board, dr: i8, dc: i8) -> Option<Self> {
        let moved = self.shifted(dr, dc);
        (!moved.collides(board)).then_some(moved)
    }

    /// Propose the next rotation state, trying the wall kicks in order.
    pub fn try_rotate(&self, board: &Board) -> Option<Self> {
        let rotation = next_rotation(self.kind, self.rotation);
        WALL_KICKS.iter().find_map(|&dc| {
            let candidate = Self {
                rotation,
                col: self.col.saturating_add(dc),
                ..*self
            };
            (!candidate.collides(board)).then_some(candidate)
        })
    }

    /// Lowest row the piece can fall to from here without colliding.
    ///
    /// Returns the current row when the very next row is already blocked.
    pub fn drop_row(&self, board: &Board) -> i8 {
        let mut row = self.row;
        while !collides(board, self.kind, self.rotation, row + 1, self.col) {
            row += 1;
        }
        row
    }
}
