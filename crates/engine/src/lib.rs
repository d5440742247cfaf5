//! Game loop engine.
//!
//! Drives a [`GameState`](crate::core::GameState) from two asynchronous
//! producers - a fixed-period gravity timer and a channel of player input -
//! and pushes a snapshot to a [`Renderer`] after every transition.
//!
//! The engine is agnostic of where input comes from and how frames are
//! drawn: the terminal binary plugs in crossterm on both sides, tests plug in
//! plain channels and closures.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use blockfall_engine::core::{GameSnapshot, GameState};
//! use blockfall_engine::types::{GameOverReason, InputEvent};
//! use blockfall_engine::Scheduler;
//!
//! let rt = tokio::runtime::Builder::new_current_thread()
//!     .enable_time()
//!     .build()
//!     .unwrap();
//!
//! let (tx, rx) = tokio::sync::mpsc::channel(4);
//! tx.try_send(Ok(InputEvent::HardDrop)).unwrap();
//! tx.try_send(Ok(InputEvent::Quit)).unwrap();
//!
//! let render = |_: &GameSnapshot| -> anyhow::Result<()> { Ok(()) };
//! let mut scheduler = Scheduler::new(GameState::new(7), render, Duration::from_secs(60));
//! let summary = rt.block_on(scheduler.run(rx)).unwrap();
//!
//! assert_eq!(summary.reason, GameOverReason::Quit);
//! assert_eq!(summary.pieces, 1);
//! ```

pub mod config;
pub mod error;
pub mod scheduler;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use config::GameConfig;
pub use error::{InputError, InputMessage};
pub use scheduler::{GameSummary, Renderer, Scheduler};
