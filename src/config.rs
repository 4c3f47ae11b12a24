//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `SIMON_SEED` | time-derived | RNG seed; set it to replay the same sequence |
//! | `SIMON_STEP_MS` | 800 | Interval between playback highlights |
//! | `SIMON_FLASH_MS` | 400 | How long a pad stays lit |
//! | `SIMON_ROUND_DELAY_MS` | 1000 | Pause before the next round |
//! | `SIMON_SOUND` | on | Terminal bell with each highlight (`0`, `false`, `off` disable) |
//! | `SIMON_LOG_PATH` | unset | JSON-lines game event journal |
//! | `SIMON_TRACE_PATH` | unset | `tracing` output file (filter via `RUST_LOG`) |
//!
//! Missing or unparsable values fall back to the default. Intervals are
//! clamped so the flash always ends before the next playback step.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::Timing;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub timing: Timing,
    pub sound: bool,
    pub log_path: Option<String>,
    pub trace_path: Option<String>,
}

impl AppConfig {
    /// Create from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Timing::default();
        let number = |key: &str, default: u32| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        };
        let path = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = lookup("SIMON_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(time_seed);

        let timing = Timing {
            step_ms: number("SIMON_STEP_MS", defaults.step_ms),
            flash_ms: number("SIMON_FLASH_MS", defaults.flash_ms),
            round_delay_ms: number("SIMON_ROUND_DELAY_MS", defaults.round_delay_ms),
        }
        .sanitized();

        let sound = lookup("SIMON_SOUND")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "0" | "false" | "off" | "no"))
            .unwrap_or(true);

        Self {
            seed,
            timing,
            sound,
            log_path: path("SIMON_LOG_PATH"),
            trace_path: path("SIMON_TRACE_PATH"),
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
