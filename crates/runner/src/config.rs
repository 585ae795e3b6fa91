//! Runtime configuration
//!
//! Read from environment variables (the deployment default) or from a JSON
//! file passed with `--config`. Every field has a default, so an empty
//! environment yields a runnable in-memory setup.

use brokerx_auth::LockoutConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
pub const PASSWORD_ALLOWED_RETRIES: &str = "PASSWORD_ALLOWED_RETRIES";
pub const PASSWORD_LOCK_DURATION_MINUTES: &str = "PASSWORD_LOCK_DURATION_MINUTES";

/// Root configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerConfig {
    /// PostgreSQL connection string; in-memory storage when absent
    #[serde(default)]
    pub database_url: Option<String>,

    /// Connection pool size
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Login lockout policy
    #[serde(default)]
    pub auth: LockoutConfig,
}

fn default_max_connections() -> u32 {
    5
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            max_connections: default_max_connections(),
            auth: LockoutConfig::default(),
        }
    }
}

impl BrokerConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            database_url: lookup(DATABASE_URL).filter(|url| !url.trim().is_empty()),
            ..Self::default()
        };

        if let Some(value) = lookup(DATABASE_MAX_CONNECTIONS) {
            config.max_connections = parse_var(DATABASE_MAX_CONNECTIONS, &value)?;
        }
        if let Some(value) = lookup(PASSWORD_ALLOWED_RETRIES) {
            config.auth.password_allowed_retries = parse_var(PASSWORD_ALLOWED_RETRIES, &value)?;
        }
        if let Some(value) = lookup(PASSWORD_LOCK_DURATION_MINUTES) {
            config.auth.password_lock_duration_minutes =
                parse_var(PASSWORD_LOCK_DURATION_MINUTES, &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: DATABASE_MAX_CONNECTIONS,
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        self.auth.validate()?;
        Ok(())
    }

    pub fn uses_database(&self) -> bool {
        self.database_url.is_some()
    }
}

fn parse_var<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Lockout(#[from] brokerx_auth::ConfigError),
}
