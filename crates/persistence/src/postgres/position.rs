use async_trait::async_trait;
use brokerx_core::{Position, UserId};
use brokerx_ports::{PositionRepository, RepositoryResult};
use sqlx::Row;
use sqlx::postgres::PgPool;

use super::backend;

/// PostgreSQL position repository
#[derive(Clone)]
pub struct PgPositionRepository {
    pool: PgPool,
}

impl PgPositionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a position row
    pub async fn insert(&self, position: &Position) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO positions (user_id, symbol, quantity, unit_price)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(position.user_id)
        .bind(&position.symbol)
        .bind(i64::try_from(position.quantity).map_err(backend)?)
        .bind(position.unit_price)
        .execute(&self.pool)
        .await
        .map_err(backend)?;
        Ok(())
    }
}

#[async_trait]
impl PositionRepository for PgPositionRepository {
    async fn find_by_user_id_and_symbol(
        &self,
        user_id: UserId,
        symbol: &str,
    ) -> RepositoryResult<Vec<Position>> {
        let rows = sqlx::query(
            r#"
            SELECT symbol, quantity, unit_price
            FROM positions WHERE user_id = $1 AND symbol = $2
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .bind(symbol)
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;

        rows.iter()
            .map(|row| {
                let quantity: i64 = row.try_get("quantity").map_err(backend)?;
                Ok(Position {
                    user_id,
                    symbol: row.try_get("symbol").map_err(backend)?,
                    quantity: u64::try_from(quantity).map_err(backend)?,
                    unit_price: row.try_get("unit_price").map_err(backend)?,
                })
            })
            .collect()
    }
}
