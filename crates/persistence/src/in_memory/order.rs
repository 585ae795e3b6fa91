use async_trait::async_trait;
use brokerx_core::{Order, OrderId, UserId};
use brokerx_ports::{OrderRepository, RepositoryResult};
use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// In-memory order store with sequential ids starting at 1
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<DashMap<OrderId, Order>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: OrderId) -> Option<Order> {
        self.orders.get(&id).map(|o| o.value().clone())
    }

    /// All orders of a user, by ascending id
    pub fn list_by_user(&self, user_id: UserId) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|e| e.value().user_id == user_id)
            .map(|e| e.value().clone())
            .collect();
        orders.sort_by_key(|o| o.id);
        orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create_order(&self, order: &Order) -> RepositoryResult<OrderId> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut stored = order.clone();
        stored.id = Some(id);
        self.orders.insert(id, stored);
        Ok(id)
    }
}
