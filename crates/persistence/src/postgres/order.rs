use async_trait::async_trait;
use brokerx_core::{Order, OrderId};
use brokerx_ports::{OrderRepository, RepositoryResult};
use log::error;
use sqlx::Row;
use sqlx::postgres::PgPool;

use super::backend;

/// PostgreSQL order repository
#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create_order(&self, order: &Order) -> RepositoryResult<OrderId> {
        let quantity = i64::try_from(order.quantity).map_err(backend)?;

        let row = sqlx::query(
            r#"
            INSERT INTO orders
                (user_id, symbol, type, action, quantity, unit_price, timing, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(order.user_id)
        .bind(&order.symbol)
        .bind(order.order_type.as_str())
        .bind(order.action.as_str())
        .bind(quantity)
        .bind(order.unit_price)
        .bind(order.time_in_force.as_str())
        .bind(order.status.as_str())
        .bind(order.created_at)
        .bind(order.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Error creating order: {}", e);
            backend(e)
        })?;

        row.try_get("id").map_err(backend)
    }
}
