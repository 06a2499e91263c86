//! Playback configuration.
//!
//! Reads from the environment, falling back to defaults:
//! - `ALGOTRACE_BASE_INTERVAL_MS`: delay between ticks at 1x (default: 1000)

use std::time::Duration;

pub const BASE_INTERVAL_ENV: &str = "ALGOTRACE_BASE_INTERVAL_MS";

const DEFAULT_BASE_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Tick delay at [`Speed::Normal`](crate::Speed::Normal).
    pub base_interval: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            base_interval: Duration::from_millis(DEFAULT_BASE_INTERVAL_MS),
        }
    }
}

impl PlaybackConfig {
    pub fn with_base_interval(base_interval: Duration) -> Self {
        PlaybackConfig { base_interval }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let Some(raw) = lookup(BASE_INTERVAL_ENV) else {
            return Self::default();
        };
        match raw.trim().parse::<u64>() {
            Ok(ms) if ms > 0 => Self::with_base_interval(Duration::from_millis(ms)),
            _ => {
                tracing::warn!(
                    value = %raw,
                    "ignoring invalid {BASE_INTERVAL_ENV}, using {DEFAULT_BASE_INTERVAL_MS}ms"
                );
                Self::default()
            }
        }
    }
}
