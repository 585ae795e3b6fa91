use brokerx_core::{
    AuthenticatedUser, Order, OrderAction, OrderId, OrderType, Price, Quantity, Symbol,
    TimeInForce,
};
use brokerx_ports::{Clock, ComplianceCheck, OrderRepository};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::PlaceOrderError;

/// Order request as submitted by an authenticated user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceOrderCommand {
    pub symbol: Symbol,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub action: OrderAction,
    pub quantity: Quantity,
    pub unit_price: Price,
    #[serde(rename = "timing")]
    pub time_in_force: TimeInForce,
}

impl PlaceOrderCommand {
    /// Limit order good for the day
    pub fn new(
        symbol: impl Into<Symbol>,
        action: OrderAction,
        quantity: Quantity,
        unit_price: Price,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            order_type: OrderType::Limit,
            action,
            quantity,
            unit_price,
            time_in_force: TimeInForce::DAY,
        }
    }

    pub fn limit_buy(symbol: impl Into<Symbol>, quantity: Quantity, unit_price: Price) -> Self {
        Self::new(symbol, OrderAction::Buy, quantity, unit_price)
    }

    pub fn limit_sell(symbol: impl Into<Symbol>, quantity: Quantity, unit_price: Price) -> Self {
        Self::new(symbol, OrderAction::Sell, quantity, unit_price)
    }

    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }

    pub fn with_time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = time_in_force;
        self
    }
}

/// Validate, gate and persist new orders
///
/// Steps run strictly in sequence and stop at the first failure. Nothing is
/// compensated: an order refused by the repository has still passed
/// compliance, and no funds or holdings are reserved either way.
pub struct OrderPlacementWorkflow<K, O, C>
where
    K: ComplianceCheck,
    O: OrderRepository,
    C: Clock,
{
    compliance: Arc<K>,
    order_repo: Arc<O>,
    clock: Arc<C>,
}

impl<K, O, C> OrderPlacementWorkflow<K, O, C>
where
    K: ComplianceCheck,
    O: OrderRepository,
    C: Clock,
{
    pub fn new(compliance: Arc<K>, order_repo: Arc<O>, clock: Arc<C>) -> Self {
        Self {
            compliance,
            order_repo,
            clock,
        }
    }

    /// Place an order that has already been built
    pub async fn place_order(&self, order: &Order) -> Result<OrderId, PlaceOrderError> {
        order.validate()?;
        self.compliance.verify_order_compliance(order).await?;

        let id = self.order_repo.create_order(order).await?;
        info!(
            "Order placed: id={}, user={}, {} {} {} @ {}",
            id,
            order.user_id,
            order.action,
            order.quantity,
            order.symbol,
            order.unit_price
        );
        Ok(id)
    }

    /// Build an open order for `identity` and place it
    pub async fn submit(
        &self,
        identity: &AuthenticatedUser,
        command: PlaceOrderCommand,
    ) -> Result<OrderId, PlaceOrderError> {
        let order = Order::new_with_time(
            identity.user_id,
            command.symbol,
            command.order_type,
            command.action,
            command.quantity,
            command.unit_price,
            command.time_in_force,
            self.clock.now(),
        );
        debug!("Order submitted: user={}, order={:?}", identity.email, order);

        self.place_order(&order).await
    }
}
