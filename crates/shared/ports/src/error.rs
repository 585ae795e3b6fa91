use brokerx_core::{Quantity, Symbol};
use rust_decimal::Decimal;
use thiserror::Error;

/// Failures reported by repository adapters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("storage backend error: {0}")]
    Backend(String),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        RepositoryError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn backend(err: impl ToString) -> Self {
        RepositoryError::Backend(err.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Reasons an order fails the compliance gate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComplianceError {
    #[error("not enough available funds: required {required}, available {available}")]
    InsufficientFunds {
        required: Decimal,
        available: Decimal,
    },

    #[error("not enough owned stocks of {symbol}: requested {requested}, owned {owned}")]
    InsufficientHoldings {
        symbol: Symbol,
        requested: Quantity,
        owned: Quantity,
    },

    /// Wallet and position lookups surface unchanged
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
