//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. The service has deliberately few knobs: a port and a log level.

use std::env;

use tracing::Level;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP listen port
    pub port: u16,

    /// Maximum tracing level
    pub log_level: Level,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            port: env::var("API_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("API_PORT".to_string()))?,

            log_level: env::var("API_LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("API_LOG_LEVEL".to_string()))?,
        };

        Ok(config)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            port: 8080,
            log_level: Level::INFO,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
