use async_trait::async_trait;
use brokerx_core::{User, UserId};
use brokerx_ports::{RepositoryError, RepositoryResult, UserRepository};
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory user repository
///
/// Thread-safe storage for users using DashMap.
/// Suitable for simulation and testing.
pub struct InMemoryUserRepository {
    /// Users by ID
    users: Arc<DashMap<UserId, User>>,
    /// Index: email -> user_id
    email_index: Arc<DashMap<String, UserId>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(DashMap::new()),
            email_index: Arc::new(DashMap::new()),
        }
    }

    /// Register a user (out-of-band registration)
    ///
    /// Replaces any user previously stored under the same id or email.
    pub fn insert(&self, user: User) {
        if let Some((_, previous)) = self.email_index.remove(&user.email) {
            self.users.remove(&previous);
        }
        self.email_index.insert(user.email.clone(), user.id);
        self.users.insert(user.id, user);
    }

    /// Get a user by ID
    pub fn get(&self, id: UserId) -> Option<User> {
        self.users.get(&id).map(|u| u.value().clone())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryUserRepository {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            email_index: Arc::clone(&self.email_index),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> RepositoryResult<User> {
        self.email_index
            .get(email)
            .and_then(|id| self.users.get(id.value()).map(|u| u.value().clone()))
            .ok_or_else(|| RepositoryError::not_found("user", email))
    }

    async fn update(&self, user: &User) -> RepositoryResult<()> {
        // Only the lockout fields are written, like the SQL adapter
        let mut stored = self
            .users
            .get_mut(&user.id)
            .ok_or_else(|| RepositoryError::not_found("user", user.id))?;
        stored.failed_attempts = user.failed_attempts;
        stored.locked_until = user.locked_until;
        Ok(())
    }
}
