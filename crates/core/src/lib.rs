//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game and nothing else.
//! It has no dependencies on terminals, timers or threads, which keeps it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a plain function or method call
//! - **Portable**: Runs headless, under the async scheduler, or in benchmarks
//!
//! # Module Structure
//!
//! - [`shapes`]: Tetromino catalog, rotation states indexed by kind
//! - [`board`]: 20x12 grid with row clearing and compaction
//! - [`collision`]: Boundary and stack collision test
//! - [`piece`]: The active piece and its move/rotate/drop proposals
//! - [`landing`]: Committing a piece and scoring line clears
//! - [`rng`]: Seeded piece selection
//! - [`game_state`]: Single-owner game state driven by input and gravity
//! - [`snapshot`]: Immutable copy of the state handed to renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::InputEvent;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_input(InputEvent::MoveRight);
//! game.apply_input(InputEvent::Rotate);
//! game.apply_input(InputEvent::HardDrop);
//!
//! assert!(game.score() > 0); // Hard drop awards one point per row
//! assert_eq!(game.pieces(), 1);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod landing;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use game_state::GameState;
pub use landing::{land, line_clear_score, LandOutcome};
pub use piece::ActivePiece;
pub use rng::{PieceSource, SimpleRng};
pub use shapes::{cells_of, rotation_count};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
