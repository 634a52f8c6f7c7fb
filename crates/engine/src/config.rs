//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `PLATFORMER_SEED` | clock-derived | Seed for platform placement |
//! | `PLATFORMER_SPRITE` | `assets/player.png` | Player sprite image |
//! | `PLATFORMER_LOG_PATH` | `logs/tui-platformer.log` | Log file (stdout belongs to the game) |
//! | `PLATFORMER_KEY_RELEASE_MS` | 400 | Held-key timeout for terminals without release events |
//!
//! Unparseable values fall back to the default.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_SPRITE_PATH: &str = "assets/player.png";
pub const DEFAULT_LOG_PATH: &str = "logs/tui-platformer.log";
pub const DEFAULT_KEY_RELEASE_MS: u32 = 400;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub sprite_path: PathBuf,
    pub log_path: PathBuf,
    pub key_release_timeout_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            sprite_path: PathBuf::from(DEFAULT_SPRITE_PATH),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_MS,
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any key/value source; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = non_empty("PLATFORMER_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let sprite_path = non_empty("PLATFORMER_SPRITE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SPRITE_PATH));

        let log_path = non_empty("PLATFORMER_LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH));

        let key_release_timeout_ms = non_empty("PLATFORMER_KEY_RELEASE_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_KEY_RELEASE_MS);

        Self {
            seed,
            sprite_path,
            log_path,
            key_release_timeout_ms,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
