//! Runtime configuration.
//!
//! All settings come from environment variables:
//!
//! - `FOUR_BLOCKS_GRAVITY_MS`: milliseconds between gravity ticks (default 1000)
//! - `FOUR_BLOCKS_SEED`: seed for the piece sequence (default: random)
//! - `FOUR_BLOCKS_LOG_PATH`: file to write logs to (default: logging off)

use std::path::PathBuf;

use crate::types::DEFAULT_GRAVITY_MS;

pub const GRAVITY_MS_VAR: &str = "FOUR_BLOCKS_GRAVITY_MS";
pub const SEED_VAR: &str = "FOUR_BLOCKS_SEED";
pub const LOG_PATH_VAR: &str = "FOUR_BLOCKS_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub gravity_ms: u32,
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gravity_ms: DEFAULT_GRAVITY_MS,
            seed: None,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let gravity_ms = match get(GRAVITY_MS_VAR) {
            Some(raw) => {
                let ms: u32 = parse_var(GRAVITY_MS_VAR, &raw)?;
                if ms == 0 {
                    return Err(ConfigError::Invalid {
                        var: GRAVITY_MS_VAR.to_string(),
                        reason: "must be greater than zero".to_string(),
                    });
                }
                ms
            }
            None => DEFAULT_GRAVITY_MS,
        };

        let seed = get(SEED_VAR)
            .map(|raw| parse_var(SEED_VAR, &raw))
            .transpose()?;

        let log_path = get(LOG_PATH_VAR).map(PathBuf::from);

        Ok(Self {
            gravity_ms,
            seed,
            log_path,
        })
    }
}

fn parse_var<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var: var.to_string(),
        reason: format!("{raw:?}: {e}"),
    })
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}
