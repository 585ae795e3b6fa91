use async_trait::async_trait;
use brokerx_core::{UserId, Wallet};
use brokerx_ports::{RepositoryError, RepositoryResult, WalletRepository};
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory wallet repository, one wallet per user
#[derive(Clone, Default)]
pub struct InMemoryWalletRepository {
    wallets: Arc<DashMap<UserId, Wallet>>,
}

impl InMemoryWalletRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the wallet of `wallet.user_id`
    pub fn insert(&self, wallet: Wallet) {
        self.wallets.insert(wallet.user_id, wallet);
    }
}

#[async_trait]
impl WalletRepository for InMemoryWalletRepository {
    async fn find_by_user_id(&self, user_id: UserId) -> RepositoryResult<Wallet> {
        self.wallets
            .get(&user_id)
            .map(|w| w.value().clone())
            .ok_or_else(|| RepositoryError::not_found("wallet", user_id))
    }
}
