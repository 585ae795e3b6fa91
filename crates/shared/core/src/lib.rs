//! BrokerX Core Domain
//!
//! Pure domain types for the BrokerX brokerage.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    AuthenticatedUser,
    LockoutState,
    // Trading entities
    Order,
    OrderAction,
    OrderStatus,
    OrderType,
    Position,
    TimeInForce,
    // Account entities
    User,
    Wallet,
};
pub use error::{OrderValidationError, ParseEnumError};
pub use values::{OrderId, Price, Quantity, Symbol, Timestamp, UserId};
