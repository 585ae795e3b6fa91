use async_trait::async_trait;
use brokerx_core::{UserId, Wallet};
use brokerx_ports::{RepositoryResult, WalletRepository};
use sqlx::Row;
use sqlx::postgres::PgPool;

use super::{backend, lookup_error};

/// PostgreSQL wallet repository
#[derive(Clone)]
pub struct PgWalletRepository {
    pool: PgPool,
}

impl PgWalletRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert or replace a wallet
    pub async fn upsert(&self, wallet: &Wallet) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO wallets (user_id, available_funds, funds_on_hold)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO UPDATE SET
                available_funds = EXCLUDED.available_funds,
                funds_on_hold = EXCLUDED.funds_on_hold
            "#,
        )
        .bind(wallet.user_id)
        .bind(wallet.available_funds)
        .bind(wallet.funds_on_hold)
        .execute(&self.pool)
        .await
        .map_err(backend)?;
        Ok(())
    }
}

#[async_trait]
impl WalletRepository for PgWalletRepository {
    async fn find_by_user_id(&self, user_id: UserId) -> RepositoryResult<Wallet> {
        let row = sqlx::query(
            r#"
            SELECT available_funds, funds_on_hold FROM wallets WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| lookup_error("wallet", user_id, e))?;

        Ok(Wallet {
            user_id,
            available_funds: row.try_get("available_funds").map_err(backend)?,
            funds_on_hold: row.try_get("funds_on_hold").map_err(backend)?,
        })
    }
}
