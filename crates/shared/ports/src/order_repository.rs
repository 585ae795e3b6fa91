use async_trait::async_trait;
use brokerx_core::{Order, OrderId};

use crate::error::RepositoryResult;

/// Storage of placed orders
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert a new order and return the id assigned to it
    async fn create_order(&self, order: &Order) -> RepositoryResult<OrderId>;
}
