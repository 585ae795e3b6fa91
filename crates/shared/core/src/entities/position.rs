use serde::{Deserialize, Serialize};

use crate::values::{Price, Quantity, Symbol, UserId};

/// A held quantity of a symbol
///
/// A user may own several rows for the same symbol (one per lot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub user_id: UserId,
    pub symbol: Symbol,
    pub quantity: Quantity,
    /// Average entry price
    pub unit_price: Price,
}

impl Position {
    pub fn new(
        user_id: UserId,
        symbol: impl Into<Symbol>,
        quantity: Quantity,
        unit_price: Price,
    ) -> Self {
        Self {
            user_id,
            symbol: symbol.into(),
            quantity,
            unit_price,
        }
    }

    /// Sum of quantities across position rows, saturating at `Quantity::MAX`
    pub fn total_quantity<'a>(positions: impl IntoIterator<Item = &'a Position>) -> Quantity {
        positions
            .into_iter()
            .fold(0, |total: Quantity, p| total.saturating_add(p.quantity))
    }
}
