//! Runtime configuration from environment variables.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `SIMON_SEED` | RNG seed (u64) | derived from the clock |
//! | `SIMON_STRICT` | start in strict mode (`1`/`true`/`on`) | off |
//! | `SIMON_SOUND` | `off`, `bell`, or `tone` | `bell` |
//! | `SIMON_LOG_PATH` | append logs to this file | logging off |
//! | `SIMON_LOG` | tracing filter (falls back to `RUST_LOG`) | `info` |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::audio::SoundMode;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SIMON_SEED must be an unsigned integer, got '{0}'")]
    InvalidSeed(String),

    #[error("{var} must be a boolean (1/0, true/false, on/off), got '{value}'")]
    InvalidBool { var: &'static str, value: String },

    #[error("SIMON_SOUND must be one of off, bell, tone; got '{0}'")]
    InvalidSound(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u64,
    pub strict: bool,
    pub sound: SoundMode,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            strict: false,
            sound: SoundMode::default(),
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Create from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mut config = Self::default();

        if let Some(v) = get("SIMON_SEED") {
            config.seed = v.parse().map_err(|_| ConfigError::InvalidSeed(v))?;
        }
        if let Some(v) = get("SIMON_STRICT") {
            config.strict = parse_bool("SIMON_STRICT", &v)?;
        }
        if let Some(v) = get("SIMON_SOUND") {
            config.sound = SoundMode::from_str(&v).ok_or(ConfigError::InvalidSound(v))?;
        }
        config.log_path = get("SIMON_LOG_PATH").map(PathBuf::from);
        if let Some(v) = get("SIMON_LOG").or_else(|| get("RUST_LOG")) {
            config.log_filter = v;
        }

        Ok(config)
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
