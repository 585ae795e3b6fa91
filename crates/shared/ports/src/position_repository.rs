use async_trait::async_trait;
use brokerx_core::{Position, UserId};

use crate::error::RepositoryResult;

/// Read access to the position book
#[async_trait]
pub trait PositionRepository: Send + Sync {
    /// All position rows of a user for a symbol; empty when none are held
    async fn find_by_user_id_and_symbol(
        &self,
        user_id: UserId,
        symbol: &str,
    ) -> RepositoryResult<Vec<Position>>;
}
