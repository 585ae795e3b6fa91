//! Order placement errors

use brokerx_core::OrderValidationError;
use brokerx_ports::{ComplianceError, RepositoryError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaceOrderError {
    #[error("invalid order: {0}")]
    InvalidOrder(#[from] OrderValidationError),

    #[error(transparent)]
    Compliance(#[from] ComplianceError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl PlaceOrderError {
    /// True when the order was refused for funds or holdings
    pub fn is_compliance(&self) -> bool {
        matches!(self, PlaceOrderError::Compliance(_))
    }
}
