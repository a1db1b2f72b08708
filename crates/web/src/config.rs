//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `LP_HOST` - Bind address (default: 127.0.0.1)
//! - `LP_PORT` - Listen port (default: 3000)
//! - `LP_STATE_DIR` - Directory holding persisted sessions (default: .loyalty-pro)
//! - `LP_ACCOUNT_DELAY_MS` - Delay of forgot/reset/change password (default: 1000)
//! - `LP_SIGNUP_DELAY_MS` - Delay of merchant sign-up (default: 2000)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::session::SimulatedLatency;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_STATE_DIR: &str = ".loyalty-pro";
const DEFAULT_ACCOUNT_DELAY_MS: &str = "1000";
const DEFAULT_SIGNUP_DELAY_MS: &str = "2000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Where `FileStorage` keeps the persisted principals
    pub state_dir: PathBuf,
    /// Delays of the simulated account operations
    pub latency: SimulatedLatency,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
            latency: SimulatedLatency::default(),
        }
    }
}

impl WebConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file first if one is present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set but cannot
    /// be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("LP_HOST", DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("LP_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("LP_PORT", DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("LP_PORT".to_string(), e.to_string()))?;
        let state_dir = PathBuf::from(get_env_or_default("LP_STATE_DIR", DEFAULT_STATE_DIR));

        let latency = SimulatedLatency {
            account: get_millis("LP_ACCOUNT_DELAY_MS", DEFAULT_ACCOUNT_DELAY_MS)?,
            sign_up: get_millis("LP_SIGNUP_DELAY_MS", DEFAULT_SIGNUP_DELAY_MS)?,
        };

        Ok(Self {
            host,
            port,
            state_dir,
            latency,
        })
    }

    /// Get the socket address to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an optional environment variable.
#[must_use]
pub fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
#[must_use]
pub fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

fn get_millis(key: &str, default: &str) -> Result<Duration, ConfigError> {
    parse_millis(key, &get_env_or_default(key, default))
}

fn parse_millis(key: &str, value: &str) -> Result<Duration, ConfigError> {
    value
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
