//! Lockout state transitions
//!
//! The policy decides the outcome of an attempt; this module decides what the
//! persisted lockout fields become. Keeping it pure lets every transition be
//! tested without a repository.

use brokerx_core::{LockoutState, Timestamp};

use crate::config::LockoutConfig;

/// Result of checking a password against the stored credential
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Succeeded,
    Failed,
}

/// Lockout fields after a verified attempt made at `now`
///
/// - success clears both the counter and the lock
/// - failure increments the counter and, once it reaches
///   `password_allowed_retries`, locks until `now + lock duration`;
///   below the threshold an expired lock is dropped
///
/// Callers compare the result with `current` to decide whether anything
/// needs to be persisted.
pub fn next_lockout_state(
    current: &LockoutState,
    outcome: AttemptOutcome,
    config: &LockoutConfig,
    now: Timestamp,
) -> LockoutState {
    match outcome {
        AttemptOutcome::Succeeded => LockoutState::cleared(),
        AttemptOutcome::Failed => {
            let failed_attempts = current.failed_attempts.saturating_add(1);
            let locked_until = if failed_attempts >= config.password_allowed_retries {
                Some(now + config.lock_duration())
            } else {
                current.locked_until.filter(|until| *until > now)
            };
            LockoutState {
                failed_attempts,
                locked_until,
            }
        }
    }
}
