//! Application configuration loaded from environment variables.
//!
//! The app shell resolves platform paths (documents dir, cache dirs) and
//! hands them to the core through the environment before init.

use std::env;
use std::path::PathBuf;

/// Core configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory for persisted key-value state
    pub data_dir: PathBuf,
    /// Cached media directories wiped by a local-data reset
    pub cache_dirs: Vec<PathBuf>,
    /// Base URL of the AllIn API gateway
    pub gateway_url: String,
    /// Upload activity screen refresh interval (seconds)
    pub poll_interval_secs: u64,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_dir: env::temp_dir().join("allin-core-test"),
            cache_dirs: Vec::new(),
            gateway_url: "http://localhost:8080".to_string(),
            poll_interval_secs: 3,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            data_dir: env::var("ALLIN_DATA_DIR")
                .map(PathBuf::from)
                .map_err(|_| ConfigError::Missing("ALLIN_DATA_DIR"))?,
            cache_dirs: env::var("ALLIN_CACHE_DIRS")
                .map(|v| {
                    v.split(':')
                        .filter(|p| !p.trim().is_empty())
                        .map(PathBuf::from)
                        .collect()
                })
                .unwrap_or_default(),
            gateway_url: env::var("ALLIN_GATEWAY_URL")
                .unwrap_or_else(|_| "https://api.allin.app/v1".to_string()),
            poll_interval_secs: env::var("ALLIN_POLL_INTERVAL_SECS")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .unwrap_or(3),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
