use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lockout policy parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockoutConfig {
    /// Failed attempts allowed before the account is locked
    #[serde(default = "default_allowed_retries")]
    pub password_allowed_retries: u32,
    /// How long a lock lasts
    #[serde(default = "default_lock_duration_minutes")]
    pub password_lock_duration_minutes: u32,
}

fn default_allowed_retries() -> u32 {
    5
}

fn default_lock_duration_minutes() -> u32 {
    30
}

impl Default for LockoutConfig {
    fn default() -> Self {
        Self {
            password_allowed_retries: default_allowed_retries(),
            password_lock_duration_minutes: default_lock_duration_minutes(),
        }
    }
}

impl LockoutConfig {
    pub fn new(password_allowed_retries: u32, password_lock_duration_minutes: u32) -> Self {
        Self {
            password_allowed_retries,
            password_lock_duration_minutes,
        }
    }

    pub fn lock_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.password_lock_duration_minutes))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.password_allowed_retries == 0 {
            return Err(ConfigError::InvalidValue {
                field: "password_allowed_retries",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.password_lock_duration_minutes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "password_lock_duration_minutes",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
