use thiserror::Error;

/// Returned when a wire string does not name a known enum variant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Reasons an order cannot be accepted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderValidationError {
    #[error("order symbol is empty")]
    EmptySymbol,

    #[error("order quantity must be positive")]
    NonPositiveQuantity,

    #[error("order unit price must be positive, got {0}")]
    NonPositivePrice(rust_decimal::Decimal),

    #[error("order value out of range: {quantity} x {unit_price}")]
    NotionalOverflow {
        quantity: u64,
        unit_price: rust_decimal::Decimal,
    },
}
