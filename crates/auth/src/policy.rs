use brokerx_core::User;
use brokerx_ports::{
    Clock, PasswordVerifier, RepositoryError, SecurityEvent, SecurityEventSink, UserRepository,
};
use log::debug;
use std::sync::Arc;

use crate::config::LockoutConfig;
use crate::error::AuthError;
use crate::lockout::{AttemptOutcome, next_lockout_state};

/// Verifies credentials and enforces temporary lockout after repeated failures
///
/// Lockout bookkeeping is written back synchronously before a decision is
/// returned, but a failed write never changes the decision: it is reported
/// to the [`SecurityEventSink`] instead.
///
/// Concurrent attempts against the same account each perform their own
/// read-modify-write of the lockout fields; the last write wins.
pub struct AuthenticationPolicy<U, P, C, S>
where
    U: UserRepository,
    P: PasswordVerifier,
    C: Clock,
    S: SecurityEventSink,
{
    user_repo: Arc<U>,
    verifier: Arc<P>,
    clock: Arc<C>,
    events: Arc<S>,
    config: LockoutConfig,
}

impl<U, P, C, S> AuthenticationPolicy<U, P, C, S>
where
    U: UserRepository,
    P: PasswordVerifier,
    C: Clock,
    S: SecurityEventSink,
{
    pub fn new(
        user_repo: Arc<U>,
        verifier: Arc<P>,
        clock: Arc<C>,
        events: Arc<S>,
        config: LockoutConfig,
    ) -> Self {
        Self {
            user_repo,
            verifier,
            clock,
            events,
            config,
        }
    }

    pub fn config(&self) -> &LockoutConfig {
        &self.config
    }

    /// Authenticate `email` with `password`
    ///
    /// Returns the user with its lockout fields as persisted (or as they
    /// would have been, if the write-back failed).
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = match self.user_repo.find_by_email(email).await {
            Ok(user) => user,
            Err(err) => {
                debug!("User lookup failed during login: {}", err);
                self.events.record(SecurityEvent::UnknownAccount);
                return Err(AuthError::UserNotFound);
            }
        };

        let now = self.clock.now();
        if let Some(until) = user.locked_until.filter(|until| *until > now) {
            self.events.record(SecurityEvent::LockedAccountAttempt {
                user_id: user.id,
                until,
            });
            return Err(AuthError::AccountLocked);
        }

        let outcome = if self.verifier.verify(password, &user.password_hash) {
            AttemptOutcome::Succeeded
        } else {
            AttemptOutcome::Failed
        };

        let current = user.lockout();
        let next = next_lockout_state(&current, outcome, &self.config, now);
        let user = user.with_lockout(next);

        if next != current {
            self.write_back(&user).await;
        }

        match outcome {
            AttemptOutcome::Succeeded => {
                self.events
                    .record(SecurityEvent::LoginSucceeded { user_id: user.id });
                Ok(user)
            }
            AttemptOutcome::Failed => {
                self.events.record(SecurityEvent::LoginRejected {
                    user_id: user.id,
                    failed_attempts: next.failed_attempts,
                });
                if let Some(until) = next.locked_until.filter(|_| next.is_locked_at(now)) {
                    self.events.record(SecurityEvent::AccountLockedOut {
                        user_id: user.id,
                        until,
                    });
                }
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Reset the failure counter and lift any lock
    ///
    /// Unlike the bookkeeping done during a login, this is an explicit write
    /// and its failure is returned.
    pub async fn clear_lockout(&self, email: &str) -> Result<User, RepositoryError> {
        let user = self.user_repo.find_by_email(email).await?;
        let user = user.with_lockout(Default::default());
        self.user_repo.update(&user).await?;

        debug!("Lockout cleared: user={}", user.id);
        Ok(user)
    }

    async fn write_back(&self, user: &User) {
        if let Err(err) = self.user_repo.update(user).await {
            self.events.record(SecurityEvent::LockoutWriteBackFailed {
                user_id: user.id,
                error: err.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HmacPasswordHasher;
    use async_trait::async_trait;
    use brokerx_clock::FixedClock;
    use brokerx_ports::RepositoryResult;
    use chrono::{Duration, TimeZone, Utc};
    use parking_lot::Mutex;
    use uuid::Uuid;

    const EMAIL: &str = "email";
    const PASSWORD: &str = "password";

    /// Single-user repository that records updates and can fail on demand
    #[derive(Default)]
    struct StubUserRepo {
        user: Mutex<Option<User>>,
        updates: Mutex<Vec<User>>,
        fail_lookup: bool,
        fail_update: bool,
    }

    impl StubUserRepo {
        fn with_user(user: User) -> Self {
            Self {
                user: Mutex::new(Some(user)),
                ..Default::default()
            }
        }

        fn update_count(&self) -> usize {
            self.updates.lock().len()
        }

        fn stored(&self) -> User {
            self.user.lock().clone().unwrap()
        }
    }

    #[async_trait]
    impl UserRepository for StubUserRepo {
        async fn find_by_email(&self, email: &str) -> RepositoryResult<User> {
            if self.fail_lookup {
                return Err(RepositoryError::backend("sql: connection is already closed"));
            }
            self.user
                .lock()
                .clone()
                .filter(|u| u.email == email)
                .ok_or_else(|| RepositoryError::not_found("user", email))
        }

        async fn update(&self, user: &User) -> RepositoryResult<()> {
            self.updates.lock().push(user.clone());
            if self.fail_update {
                return Err(RepositoryError::backend("sql: connection is already closed"));
            }
            *self.user.lock() = Some(user.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<SecurityEvent>>,
    }

    impl RecordingSink {
        fn events(&self) -> Vec<SecurityEvent> {
            self.events.lock().clone()
        }
    }

    impl SecurityEventSink for RecordingSink {
        fn record(&self, event: SecurityEvent) {
            self.events.lock().push(event);
        }
    }

    struct Fixture {
        repo: Arc<StubUserRepo>,
        clock: FixedClock,
        sink: Arc<RecordingSink>,
        policy: AuthenticationPolicy<StubUserRepo, HmacPasswordHasher, FixedClock, RecordingSink>,
    }

    fn make_user(failed_attempts: u32, locked_until: Option<chrono::DateTime<Utc>>) -> User {
        let hash = HmacPasswordHasher::new().hash(PASSWORD).unwrap();
        let mut user = User::new(Uuid::new_v4(), EMAIL, hash);
        user.failed_attempts = failed_attempts;
        user.locked_until = locked_until;
        user
    }

    fn start() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 14, 0, 0).unwrap()
    }

    fn fixture(repo: StubUserRepo, config: LockoutConfig) -> Fixture {
        let repo = Arc::new(repo);
        let clock = FixedClock::new(start());
        let sink = Arc::new(RecordingSink::default());
        let policy = AuthenticationPolicy::new(
            Arc::clone(&repo),
            Arc::new(HmacPasswordHasher::new()),
            Arc::new(clock.clone()),
            Arc::clone(&sink),
            config,
        );
        Fixture {
            repo,
            clock,
            sink,
            policy,
        }
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let user = make_user(0, None);
        let f = fixture(StubUserRepo::with_user(user.clone()), LockoutConfig::new(3, 15));

        let result = f.policy.authenticate(EMAIL, PASSWORD).await.unwrap();

        assert_eq!(result, user);
        // Nothing to reset, nothing written
        assert_eq!(f.repo.update_count(), 0);
        assert_eq!(
            f.sink.events(),
            vec![SecurityEvent::LoginSucceeded { user_id: user.id }]
        );
    }

    #[tokio::test]
    async fn test_authenticate_user_not_found() {
        let f = fixture(StubUserRepo::default(), LockoutConfig::default());

        let err = f.policy.authenticate(EMAIL, PASSWORD).await.unwrap_err();

        assert_eq!(err, AuthError::UserNotFound);
        assert_eq!(err.to_string(), "user not found");
        assert_eq!(f.sink.events(), vec![SecurityEvent::UnknownAccount]);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_reported_as_not_found() {
        let repo = StubUserRepo {
            fail_lookup: true,
            ..StubUserRepo::with_user(make_user(0, None))
        };
        let f = fixture(repo, LockoutConfig::default());

        let err = f.policy.authenticate(EMAIL, PASSWORD).await.unwrap_err();

        assert_eq!(err, AuthError::UserNotFound);
    }

    #[tokio::test]
    async fn test_invalid_password_triggers_lockout() {
        let f = fixture(
            StubUserRepo::with_user(make_user(0, None)),
            LockoutConfig::new(1, 15),
        );

        let err = f.policy.authenticate(EMAIL, "wrongpassword").await.unwrap_err();

        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(err.to_string(), "invalid credentials");
        let stored = f.repo.stored();
        assert_eq!(stored.failed_attempts, 1);
        assert_eq!(stored.locked_until, Some(start() + Duration::minutes(15)));
        assert!(f.sink.events().iter().any(|e| matches!(
            e,
            SecurityEvent::AccountLockedOut { until, .. } if *until == start() + Duration::minutes(15)
        )));
    }

    #[tokio::test]
    async fn test_invalid_password_below_threshold_is_persisted() {
        let f = fixture(
            StubUserRepo::with_user(make_user(1, None)),
            LockoutConfig::new(5, 30),
        );

        let err = f.policy.authenticate(EMAIL, "nope").await.unwrap_err();

        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(f.repo.update_count(), 1);
        let stored = f.repo.stored();
        assert_eq!(stored.failed_attempts, 2);
        assert_eq!(stored.locked_until, None);
        assert!(
            !f.sink
                .events()
                .iter()
                .any(|e| matches!(e, SecurityEvent::AccountLockedOut { .. }))
        );
    }

    #[tokio::test]
    async fn test_authenticate_account_locked() {
        let locked_until = start() + Duration::minutes(10);
        let f = fixture(
            StubUserRepo::with_user(make_user(0, Some(locked_until))),
            LockoutConfig::default(),
        );

        // Even the right password is refused while locked
        let err = f.policy.authenticate(EMAIL, PASSWORD).await.unwrap_err();

        assert_eq!(err, AuthError::AccountLocked);
        assert_eq!(err.to_string(), "account is locked. Try again later");
        assert_eq!(f.repo.update_count(), 0);
    }

    #[tokio::test]
    async fn test_locked_account_does_not_accumulate_failures() {
        let locked_until = start() + Duration::minutes(10);
        let f = fixture(
            StubUserRepo::with_user(make_user(5, Some(locked_until))),
            LockoutConfig::default(),
        );

        for _ in 0..3 {
            let err = f.policy.authenticate(EMAIL, "wrong").await.unwrap_err();
            assert_eq!(err, AuthError::AccountLocked);
        }

        assert_eq!(f.repo.stored().failed_attempts, 5);
        assert_eq!(f.repo.update_count(), 0);
    }

    #[tokio::test]
    async fn test_login_allowed_once_lock_expires() {
        let locked_until = start() + Duration::minutes(10);
        let f = fixture(
            StubUserRepo::with_user(make_user(5, Some(locked_until))),
            LockoutConfig::default(),
        );

        f.clock.advance(Duration::minutes(10));
        let user = f.policy.authenticate(EMAIL, PASSWORD).await.unwrap();

        assert_eq!(user.failed_attempts, 0);
        assert_eq!(user.locked_until, None);
        assert_eq!(f.repo.stored().lockout(), user.lockout());
    }

    #[tokio::test]
    async fn test_lock_user_update_failure_is_reported() {
        let repo = StubUserRepo {
            fail_update: true,
            ..StubUserRepo::with_user(make_user(0, None))
        };
        let f = fixture(repo, LockoutConfig::new(1, 15));

        let err = f.policy.authenticate(EMAIL, "wrongpassword").await.unwrap_err();

        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(f.repo.update_count(), 1);
        assert!(f.sink.events().iter().any(|e| matches!(
            e,
            SecurityEvent::LockoutWriteBackFailed { error, .. }
                if error.contains("sql: connection is already closed")
        )));
    }

    #[tokio::test]
    async fn test_authenticate_reset_lockout() {
        let f = fixture(
            StubUserRepo::with_user(make_user(3, None)),
            LockoutConfig::new(5, 5),
        );

        let user = f.policy.authenticate(EMAIL, PASSWORD).await.unwrap();

        assert_eq!(user.failed_attempts, 0);
        assert_eq!(f.repo.update_count(), 1);
        assert_eq!(f.repo.stored().failed_attempts, 0);
    }

    #[tokio::test]
    async fn test_reset_lockout_update_failure_still_authenticates() {
        let repo = StubUserRepo {
            fail_update: true,
            ..StubUserRepo::with_user(make_user(3, None))
        };
        let f = fixture(repo, LockoutConfig::new(5, 5));

        let user = f.policy.authenticate(EMAIL, PASSWORD).await.unwrap();

        assert_eq!(user.failed_attempts, 0);
        let events = f.sink.events();
        assert!(
            events
                .iter()
                .any(|e| matches!(e, SecurityEvent::LockoutWriteBackFailed { .. }))
        );
        assert_eq!(
            events.last(),
            Some(&SecurityEvent::LoginSucceeded { user_id: user.id })
        );
    }

    #[tokio::test]
    async fn test_clear_lockout() {
        let locked_until = start() + Duration::minutes(10);
        let f = fixture(
            StubUserRepo::with_user(make_user(5, Some(locked_until))),
            LockoutConfig::default(),
        );

        let user = f.policy.clear_lockout(EMAIL).await.unwrap();

        assert_eq!(user.failed_attempts, 0);
        assert_eq!(user.locked_until, None);
        assert!(f.policy.authenticate(EMAIL, PASSWORD).await.is_ok());
    }

    #[tokio::test]
    async fn test_clear_lockout_propagates_write_failure() {
        let repo = StubUserRepo {
            fail_update: true,
            ..StubUserRepo::with_user(make_user(5, None))
        };
        let f = fixture(repo, LockoutConfig::default());

        let err = f.policy.clear_lockout(EMAIL).await.unwrap_err();

        assert!(matches!(err, RepositoryError::Backend(_)));
    }
}
