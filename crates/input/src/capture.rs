//! Keyboard capture thread.
//!
//! Reads terminal events on a dedicated OS thread and forwards mapped input
//! events to the scheduler's channel. The thread stops after forwarding
//! `Quit`, after reporting a read error, or once the scheduler drops its
//! receiver (checked every poll interval).

use std::io;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::engine::InputMessage;
use crate::map::map_key_event;
use crate::types::InputEvent;

/// How long one poll waits before re-checking whether the receiver is gone.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Spawn the crossterm-backed capture thread.
pub fn spawn_keyboard(tx: mpsc::Sender<InputMessage>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("keyboard".to_string())
        .spawn(move || pump(&tx, read_crossterm))
}

fn read_crossterm(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Forward events from `source` until quit, error, or hang-up.
///
/// `source` waits up to the given timeout and returns `Ok(None)` when nothing
/// arrived.
pub fn pump<F>(tx: &mpsc::Sender<InputMessage>, mut source: F)
where
    F: FnMut(Duration) -> io::Result<Option<Event>>,
{
    loop {
        if tx.is_closed() {
            debug!("input receiver dropped, stopping capture");
            return;
        }

        match source(POLL_INTERVAL) {
            Ok(Some(Event::Key(key))) => {
                let Some(input) = map_key_event(key) else {
                    continue;
                };
                if tx.blocking_send(Ok(input)).is_err() {
                    return;
                }
                if input == InputEvent::Quit {
                    debug!("quit key forwarded, stopping capture");
                    return;
                }
            }
            Ok(_) => {}
            Err(err) => {
                warn!(error = %err, "keyboard read failed");
                let _ = tx.blocking_send(Err(err.into()));
                return;
            }
        }
    }
}
