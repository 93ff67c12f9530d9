//! Gateway configuration, loaded once at startup and immutable afterwards.

use std::time::Duration;

use clap::Parser;
use secrecy::{ExposeSecret, SecretString};

/// Minimum length for the token symmetric key when one is supplied.
const MIN_TOKEN_KEY_LEN: usize = 32;

/// Gateway configuration.
///
/// All values can be set via environment variables or CLI arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "galaxy-gateway", about = "HTTP/JSON gateway for the Galaxy backend")]
pub struct Config {
    /// Public HTTP listen address
    #[arg(long, env = "HTTP_SERVER_ADDRESS", default_value = "0.0.0.0:8080")]
    pub http_address: String,

    /// Galaxy backend gRPC address (scheme required)
    #[arg(long, env = "GRPC_SERVER_ADDRESS", default_value = "http://127.0.0.1:9090")]
    pub grpc_address: String,

    /// Symmetric key shared with the backend token issuer (min 32 chars).
    /// The gateway never mints tokens itself; this mirrors the backend's
    /// deployment configuration.
    #[arg(long, env = "TOKEN_SYMMETRIC_KEY")]
    pub token_symmetric_key: Option<SecretString>,

    /// CORS allowed origins (comma-separated, or "*" for any)
    #[arg(long, env = "CORS_ALLOW_ORIGINS")]
    pub cors_allow_origins: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "30")]
    pub request_timeout_secs: u64,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(long, env = "LOG_LEVEL", default_value = "INFO")]
    pub log_level: String,

    /// Use JSON log format
    #[arg(long, env = "JSON_LOGS", default_value = "true")]
    pub json_logs: bool,
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("token symmetric key must be at least {MIN_TOKEN_KEY_LEN} characters")]
    TokenKeyTooShort,
    #[error("backend address must include a scheme, e.g. http://host:port")]
    BackendAddressMissingScheme,
    #[error("request timeout must be > 0")]
    InvalidRequestTimeout,
}

impl Config {
    /// Parse and validate configuration.
    pub fn init() -> anyhow::Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(key) = &self.token_symmetric_key {
            if key.expose_secret().len() < MIN_TOKEN_KEY_LEN {
                return Err(ConfigError::TokenKeyTooShort);
            }
        }
        if !self.grpc_address.contains("://") {
            return Err(ConfigError::BackendAddressMissingScheme);
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidRequestTimeout);
        }
        Ok(())
    }

    /// Per-request timeout as a Duration.
    #[inline]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
