use std::{str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PREFIX: &str = "!";
const DEFAULT_JANITOR_INTERVAL_SECS: u64 = 5;
const DEFAULT_SYNC_DELAY_MS: u64 = 1000;
const DEFAULT_CACHE_TTL_SECS: u64 = 600;

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    pub prefix: String,

    pub starboard: StarboardTuning,
}

/// Timing knobs for the per-guild starboard janitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarboardTuning {
    /// Sleep between janitor passes.
    pub janitor_interval: Duration,
    /// Delay between consecutive mirror synchronizations, keeps the bot under Discord's rate limits.
    pub sync_delay: Duration,
    /// Idle time after which an unqueued cache entry is evicted.
    pub cache_ttl: Duration,
}

impl Default for StarboardTuning {
    fn default() -> Self {
        Self {
            janitor_interval: Duration::from_secs(DEFAULT_JANITOR_INTERVAL_SECS),
            sync_delay: Duration::from_millis(DEFAULT_SYNC_DELAY_MS),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            prefix: std::env::var("BOT_PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string()),
            starboard: StarboardTuning {
                janitor_interval: Duration::from_secs(optional_env(
                    "STARBOARD_JANITOR_INTERVAL_SECS",
                    DEFAULT_JANITOR_INTERVAL_SECS,
                )?),
                sync_delay: Duration::from_millis(optional_env(
                    "STARBOARD_SYNC_DELAY_MS",
                    DEFAULT_SYNC_DELAY_MS,
                )?),
                cache_ttl: Duration::from_secs(optional_env(
                    "STARBOARD_CACHE_TTL_SECS",
                    DEFAULT_CACHE_TTL_SECS,
                )?),
            },
        })
    }
}

/// Reads an optional environment variable, falling back to `default` when unset.
///
/// # Arguments
/// - `name` - Environment variable name
/// - `default` - Value used when the variable is not set
///
/// # Returns
/// - `Ok(T)` - Parsed value or the default
/// - `Err(ConfigError::InvalidValue)` - Variable is set but does not parse as `T`
fn optional_env<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
