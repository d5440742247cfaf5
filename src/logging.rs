//! Tracing subscriber setup.
//!
//! The terminal is owned by the game while it runs, so log lines never go to
//! stdout or stderr. With no log file configured no subscriber is installed
//! and the `tracing` macros compile down to cheap no-ops.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::engine::GameConfig;

/// Install a file-backed subscriber if `config.log_path` is set.
///
/// Returns whether a subscriber was installed.
pub fn init(config: &GameConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = File::create(path).with_context(|| format!("create log file {path}"))?;
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("bad log filter {:?}", config.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("install tracing subscriber")?;

    Ok(true)
}
