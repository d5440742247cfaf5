//! Collaborator failures.
//!
//! Rejected moves and game over are ordinary outcomes, not errors. The only
//! failures the loop knows about come from the input collaborator, and they
//! are fatal.

use crate::types::InputEvent;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input device error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input source disconnected before quit")]
    Disconnected,
}

/// One item on the input channel: an event, or the reason the source died.
pub type InputMessage = Result<InputEvent, InputError>;
