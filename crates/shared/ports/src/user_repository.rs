use async_trait::async_trait;
use brokerx_core::User;

use crate::error::RepositoryResult;

/// Storage of user accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up a user by its unique email
    async fn find_by_email(&self, email: &str) -> RepositoryResult<User>;

    /// Persist the lockout fields (`failed_attempts`, `locked_until`) of a user
    async fn update(&self, user: &User) -> RepositoryResult<()>;
}
