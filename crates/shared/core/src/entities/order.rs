use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{OrderAction, OrderStatus, OrderType, TimeInForce};
use crate::error::OrderValidationError;
use crate::values::{OrderId, Price, Quantity, Symbol, Timestamp, UserId};

/// Full order details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Assigned by the order repository on creation
    pub id: Option<OrderId>,
    pub user_id: UserId,
    pub symbol: Symbol,
    pub order_type: OrderType,
    pub action: OrderAction,
    pub quantity: Quantity,
    pub unit_price: Price,
    pub time_in_force: TimeInForce,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Order {
    /// Create a new open order with explicit timestamp
    #[allow(clippy::too_many_arguments)]
    pub fn new_with_time(
        user_id: UserId,
        symbol: impl Into<Symbol>,
        order_type: OrderType,
        action: OrderAction,
        quantity: Quantity,
        unit_price: Price,
        time_in_force: TimeInForce,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id: None,
            user_id,
            symbol: symbol.into(),
            order_type,
            action,
            quantity,
            unit_price,
            time_in_force,
            status: OrderStatus::Open,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Create a new open order using current system time
    /// Note: prefer `new_with_time` with clock-provided time
    pub fn new(
        user_id: UserId,
        symbol: impl Into<Symbol>,
        order_type: OrderType,
        action: OrderAction,
        quantity: Quantity,
        unit_price: Price,
        time_in_force: TimeInForce,
    ) -> Self {
        Self::new_with_time(
            user_id,
            symbol,
            order_type,
            action,
            quantity,
            unit_price,
            time_in_force,
            Utc::now(),
        )
    }

    /// Total cost of the order: unit price times quantity, no rounding
    ///
    /// `None` when the product does not fit in a `Decimal`.
    pub fn notional(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }

    /// Check the invariants every accepted order must satisfy
    pub fn validate(&self) -> Result<(), OrderValidationError> {
        if self.symbol.trim().is_empty() {
            return Err(OrderValidationError::EmptySymbol);
        }
        if self.quantity == 0 {
            return Err(OrderValidationError::NonPositiveQuantity);
        }
        if self.unit_price <= Decimal::ZERO {
            return Err(OrderValidationError::NonPositivePrice(self.unit_price));
        }
        if self.notional().is_none() {
            return Err(OrderValidationError::NotionalOverflow {
                quantity: self.quantity,
                unit_price: self.unit_price,
            });
        }
        Ok(())
    }

}
