//! Terminal blockfall runner (default binary).
//!
//! Reads the configuration from the environment, takes over the terminal,
//! and runs the scheduler on a single-threaded tokio runtime while a plain
//! thread reads the keyboard. The terminal is restored however the game ends.

use anyhow::{anyhow, Context, Result};
use tokio::sync::mpsc;
use tracing::info;

use blockfall::core::GameState;
use blockfall::engine::{GameConfig, GameSummary, Scheduler};
use blockfall::input::spawn_keyboard;
use blockfall::term::TerminalSink;

/// Keystrokes buffered between the capture thread and the game loop.
const INPUT_QUEUE: usize = 64;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    blockfall::logging::init(&config)?;

    let seed = config.seed_or_clock();
    info!(seed, tick_ms = config.tick_ms, "starting");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("build tokio runtime")?;

    let mut scheduler = Scheduler::new(GameState::new(seed), TerminalSink::stdout(), config.tick());

    let entered = scheduler.renderer_mut().terminal().enter();
    let result = entered.and_then(|()| play(&runtime, &mut scheduler));

    // Always try to restore terminal state.
    let restored = scheduler.renderer_mut().terminal().exit();

    let summary = result?;
    restored?;
    println!("{summary}");
    Ok(())
}

fn play(runtime: &tokio::runtime::Runtime, scheduler: &mut Scheduler<TerminalSink>) -> Result<GameSummary> {
    let (tx, rx) = mpsc::channel(INPUT_QUEUE);
    let keyboard = spawn_keyboard(tx).context("spawn keyboard thread")?;

    // Returning drops `rx`, which stops the keyboard thread.
    let summary = runtime.block_on(scheduler.run(rx));

    keyboard
        .join()
        .map_err(|_| anyhow!("keyboard thread panicked"))?;
    summary
}
