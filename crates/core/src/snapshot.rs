use crate::piece::ActivePiece;
use crate::types::{Cell, PieceKind, BOARD_COLS, BOARD_ROWS};

/// Falling piece as the renderer sees it: absolute cells plus a colour tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub cells: [(i8, i8); 4],
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            cells: value.cells(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_COLS as usize]; BOARD_ROWS as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub pieces: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// True when the active piece covers (row, col).
    pub fn is_active_cell(&self, row: i8, col: i8) -> bool {
        self.active
            .map(|a| a.cells.contains(&(row, col)))
            .unwrap_or(false)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[Cell::Empty; BOARD_COLS as usize]; BOARD_ROWS as usize],
            active: None,
            score: 0,
            lines: 0,
            pieces: 0,
            game_over: false,
        }
    }
}
