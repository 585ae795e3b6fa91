//! BrokerX Compliance
//!
//! Decides whether a proposed order is economically permissible:
//!
//! - **Buy**: the wallet's available funds cover `unit_price × quantity`
//! - **Sell**: the user owns at least `quantity` shares across all position rows
//!
//! The engine only reads wallets and positions; it never mutates them.

mod engine;

pub use engine::ComplianceEngine;

// Re-export the port and its error for convenience
pub use brokerx_ports::{ComplianceCheck, ComplianceError};
