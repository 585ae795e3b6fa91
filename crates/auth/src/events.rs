use brokerx_ports::{SecurityEvent, SecurityEventSink};
use log::{error, info, warn};

const TARGET: &str = "brokerx::security";

/// Reports security events through the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl SecurityEventSink for LogEventSink {
    fn record(&self, event: SecurityEvent) {
        match event {
            SecurityEvent::LoginSucceeded { user_id } => {
                info!(target: TARGET, "Login succeeded: user={}", user_id);
            }
            SecurityEvent::LoginRejected {
                user_id,
                failed_attempts,
            } => {
                warn!(
                    target: TARGET,
                    "Invalid credentials: user={}, failed_attempts={}", user_id, failed_attempts
                );
            }
            SecurityEvent::AccountLockedOut { user_id, until } => {
                warn!(target: TARGET, "Account locked: user={}, until={}", user_id, until);
            }
            SecurityEvent::LockedAccountAttempt { user_id, until } => {
                warn!(
                    target: TARGET,
                    "Login attempt on locked account: user={}, until={}", user_id, until
                );
            }
            SecurityEvent::UnknownAccount => {
                info!(target: TARGET, "Login attempt for unknown account");
            }
            SecurityEvent::LockoutWriteBackFailed { user_id, error } => {
                error!(
                    target: TARGET,
                    "Failed to update user lock status: user={}, error={}", user_id, error
                );
            }
        }
    }
}
