//! Terminal presentation for blockfall.
//!
//! Snapshots are laid out into a framebuffer by [`GameView`] (pure, no I/O)
//! and flushed by [`TerminalRenderer`], which only writes the cells that
//! changed since the previous frame. [`TerminalSink`] ties the two together
//! as the scheduler's renderer.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, TerminalSink};
