use brokerx_core::{Timestamp, UserId};

/// Observable outcomes of login attempts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityEvent {
    LoginSucceeded {
        user_id: UserId,
    },
    /// Wrong password; `failed_attempts` is the count after this attempt
    LoginRejected {
        user_id: UserId,
        failed_attempts: u32,
    },
    /// The failed attempt just crossed the retry threshold
    AccountLockedOut {
        user_id: UserId,
        until: Timestamp,
    },
    LockedAccountAttempt {
        user_id: UserId,
        until: Timestamp,
    },
    UnknownAccount,
    /// Lockout bookkeeping could not be persisted; the login decision stands
    LockoutWriteBackFailed {
        user_id: UserId,
        error: String,
    },
}

/// Capability receiving security events (logging, metrics, audit trail)
pub trait SecurityEventSink: Send + Sync {
    fn record(&self, event: SecurityEvent);
}
