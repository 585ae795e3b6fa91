use async_trait::async_trait;
use brokerx_core::Order;

use crate::error::ComplianceError;

/// Gate deciding whether an order is economically permissible
#[async_trait]
pub trait ComplianceCheck: Send + Sync {
    async fn verify_order_compliance(&self, order: &Order) -> Result<(), ComplianceError>;
}
