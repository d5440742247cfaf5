//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be
//! shared by the rules engine, the scheduler, the renderer and the input layer.
//!
//! # Board Dimensions
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 12 (indexed 0-11, left to right)
//!
//! Coordinates are always `(row, col)`.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 500 | Gravity period: one row per pulse |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{InputEvent, PieceKind, BOARD_COLS, BOARD_ROWS};
//!
//! assert_eq!(PieceKind::T.letter(), "T");
//! assert_eq!(InputEvent::HardDrop.as_str(), "hardDrop");
//!
//! assert_eq!(BOARD_ROWS, 20);
//! assert_eq!(BOARD_COLS, 12);
//! ```

/// Board height in cells (20 rows)
pub const BOARD_ROWS: u8 = 20;

/// Board width in cells (12 columns)
pub const BOARD_COLS: u8 = 12;

/// Gravity period in milliseconds
pub const TICK_MS: u64 = 500;

/// Points awarded per cleared line, before the multi-line bonus.
pub const LINE_SCORE: u32 = 100;

/// Extra points for clearing N lines at once.
///
/// - 0 or 1 lines: no bonus
/// - 2 lines: +100
/// - 3 lines: +300
/// - 4 lines: +800
pub const MULTI_LINE_BONUS: [u32; 5] = [0, 0, 100, 300, 800];


/// The seven tetromino piece kinds
///
/// Active pieces are coloured by kind; once landed, cells lose their kind.
/// - **I**: Cyan
/// - **J**: Blue
/// - **L**: Yellow
/// - **O**: Green
/// - **S**: Red
/// - **T**: Magenta
/// - **Z**: White
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Single uppercase letter, used in logs.
    pub fn letter(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }

    /// Position in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }
}

/// A cell on the game board.
///
/// Landed cells carry no identity: every filled cell looks the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled)
    }
}

/// Discrete, already-debounced player input.
///
/// Produced by the input collaborator and consumed by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, landing it if blocked
    SoftDrop,
    /// Instantly drop piece to the lowest free row and land it
    HardDrop,
    /// Advance to the next rotation state (with a one-column wall kick)
    Rotate,
    /// End the game immediately
    Quit,
}

impl InputEvent {
    /// camelCase name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputEvent::MoveLeft => "moveLeft",
            InputEvent::MoveRight => "moveRight",
            InputEvent::SoftDrop => "softDrop",
            InputEvent::HardDrop => "hardDrop",
            InputEvent::Rotate => "rotate",
            InputEvent::Quit => "quit",
        }
    }
}

/// Why a game reached its terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    /// A freshly spawned piece collided with the stack.
    ToppedOut,
    /// The player asked to quit.
    Quit,
}
