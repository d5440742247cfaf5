//! Game loop: merges gravity pulses and player input into one ordered stream
//! of state transitions.
//!
//! The scheduler owns the `GameState`. Input arrives as messages on a channel
//! and gravity comes from a tokio interval; each loop iteration waits for
//! whichever is ready first, applies it, then hands one snapshot to the
//! renderer. When both are ready at once either may go first.
//!
//! The loop ends on quit or top-out. Returning drops the input receiver and
//! the interval, which is how the collaborators learn to stop.

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{error, info, trace};

use crate::core::{GameSnapshot, GameState};
use crate::error::{InputError, InputMessage};
use crate::types::GameOverReason;

/// Receives one snapshot per loop iteration.
pub trait Renderer {
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()>;
}

impl<F> Renderer for F
where
    F: FnMut(&GameSnapshot) -> Result<()>,
{
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self(snapshot)
    }
}

/// Final tallies of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub score: u32,
    pub lines: u32,
    pub pieces: u32,
    pub reason: GameOverReason,
}

/// The two lines printed once the terminal is restored.
impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game Over!")?;
        write!(f, "Final Score: {}", self.score)
    }
}

pub struct Scheduler<R> {
    state: GameState,
    renderer: R,
    tick: Duration,
    snapshot: GameSnapshot,
}

impl<R: Renderer> Scheduler<R> {
    pub fn new(state: GameState, renderer: R, tick: Duration) -> Self {
        Self {
            state,
            renderer,
            // tokio intervals panic on a zero period
            tick: tick.max(Duration::from_millis(1)),
            snapshot: GameSnapshot::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Run until the game ends.
    ///
    /// Errors only when a collaborator fails: the input source reports an
    /// error or hangs up without sending `Quit`, or the renderer fails.
    pub async fn run(&mut self, mut inputs: mpsc::Receiver<InputMessage>) -> Result<GameSummary> {
        self.state.start();
        self.emit()?;

        // First pulse one full period after start; late pulses are dropped.
        let mut gravity = time::interval_at(Instant::now() + self.tick, self.tick);
        gravity.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(tick_ms = self.tick.as_millis() as u64, "game loop running");

        let reason = loop {
            if let Some(reason) = self.state.game_over_reason() {
                break reason;
            }

            tokio::select! {
                msg = inputs.recv() => {
                    let event = match msg {
                        Some(Ok(event)) => event,
                        Some(Err(err)) => {
                            error!(error = %err, "input source failed");
                            return Err(err).context("input source failed");
                        }
                        None => {
                            error!("input channel closed without quit");
                            return Err(InputError::Disconnected.into());
                        }
                    };
                    trace!(event = event.as_str(), "input");
                    self.state.apply_input(event);
                }
                _ = gravity.tick() => {
                    trace!("gravity");
                    self.state.gravity();
                }
            }

            self.emit()?;
        };

        let summary = GameSummary {
            score: self.state.score(),
            lines: self.state.lines(),
            pieces: self.state.pieces(),
            reason,
        };
        info!(
            score = summary.score,
            lines = summary.lines,
            pieces = summary.pieces,
            reason = ?summary.reason,
            "game loop finished"
        );
        Ok(summary)
    }

    fn emit(&mut self) -> Result<()> {
        self.state.snapshot_into(&mut self.snapshot);
        self.renderer
            .render(&self.snapshot)
            .context("renderer failed")
    }
}
