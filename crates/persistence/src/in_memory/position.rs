use async_trait::async_trait;
use brokerx_core::{Position, UserId};
use brokerx_ports::{PositionRepository, RepositoryResult};
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory position book
///
/// Rows are kept per user in insertion order; several rows may share a symbol.
#[derive(Clone, Default)]
pub struct InMemoryPositionRepository {
    positions: Arc<DashMap<UserId, Vec<Position>>>,
}

impl InMemoryPositionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a position row
    pub fn insert(&self, position: Position) {
        self.positions
            .entry(position.user_id)
            .or_default()
            .push(position);
    }
}

#[async_trait]
impl PositionRepository for InMemoryPositionRepository {
    async fn find_by_user_id_and_symbol(
        &self,
        user_id: UserId,
        symbol: &str,
    ) -> RepositoryResult<Vec<Position>> {
        Ok(self
            .positions
            .get(&user_id)
            .map(|rows| {
                rows.iter()
                    .filter(|p| p.symbol == symbol)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
