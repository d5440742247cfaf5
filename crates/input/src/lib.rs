//! Terminal input module.
//!
//! Maps `crossterm` key events into [`InputEvent`](crate::types::InputEvent)s
//! and runs the capture thread that feeds them to the scheduler.

pub mod capture;
pub mod map;

pub use blockfall_engine as engine;
pub use blockfall_types as types;

pub use capture::{pump, spawn_keyboard};
pub use map::{map_key_event, should_quit};
