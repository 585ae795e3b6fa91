use async_trait::async_trait;
use brokerx_core::{UserId, Wallet};

use crate::error::RepositoryResult;

/// Read access to user wallets
#[async_trait]
pub trait WalletRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: UserId) -> RepositoryResult<Wallet>;
}
