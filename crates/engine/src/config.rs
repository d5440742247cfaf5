//! Runtime configuration from environment variables.
//!
//! - `BLOCKFALL_TICK_MS`: gravity period in milliseconds (default 500)
//! - `BLOCKFALL_SEED`: piece randomizer seed (default: derived from the clock)
//! - `BLOCKFALL_LOG`: write tracing output to this file (default: off)
//! - `BLOCKFALL_LOG_FILTER`: tracing filter directive (default "info")
//!
//! Missing, empty or unparsable values fall back to the defaults.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub tick_ms: u64,
    pub seed: Option<u32>,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            seed: None,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let tick_ms = get("BLOCKFALL_TICK_MS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(TICK_MS);

        let seed = get("BLOCKFALL_SEED").and_then(|s| s.parse::<u32>().ok());
        let log_path = get("BLOCKFALL_LOG");
        let log_filter = get("BLOCKFALL_LOG_FILTER").unwrap_or_else(|| "info".to_string());

        Self {
            tick_ms,
            seed,
            log_path,
            log_filter,
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Configured seed, or one taken from the wall clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
                .unwrap_or(1)
        })
    }
}
