use serde::{Deserialize, Serialize};

use crate::values::{Timestamp, UserId};

/// The persisted lockout fields of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LockoutState {
    /// Consecutive failed login attempts
    pub failed_attempts: u32,
    /// Logins are refused until this instant; `None` means not locked
    pub locked_until: Option<Timestamp>,
}

impl LockoutState {
    /// No failures recorded and no lock
    pub fn cleared() -> Self {
        Self::default()
    }

    /// True when the lock is still in force at `now`
    pub fn is_locked_at(&self, now: Timestamp) -> bool {
        self.locked_until.is_some_and(|until| until > now)
    }
}

/// A brokerage account holder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Unique, used as the login key
    pub email: String,
    /// Opaque verifiable credential, never the plaintext password
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub failed_attempts: u32,
    pub locked_until: Option<Timestamp>,
}

impl User {
    pub fn new(id: UserId, email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            password_hash: password_hash.into(),
            failed_attempts: 0,
            locked_until: None,
        }
    }

    pub fn lockout(&self) -> LockoutState {
        LockoutState {
            failed_attempts: self.failed_attempts,
            locked_until: self.locked_until,
        }
    }

    /// Returns a copy carrying the given lockout fields
    pub fn with_lockout(&self, state: LockoutState) -> Self {
        Self {
            failed_attempts: state.failed_attempts,
            locked_until: state.locked_until,
            ..self.clone()
        }
    }

    pub fn is_locked_at(&self, now: Timestamp) -> bool {
        self.lockout().is_locked_at(now)
    }
}
