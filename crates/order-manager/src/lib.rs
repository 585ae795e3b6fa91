//! BrokerX Order Manager
//!
//! Accepts orders on behalf of authenticated users:
//!
//! ```text
//! PlaceOrderCommand ──► Order (Open, stamped by Clock)
//!                           │
//!                           ▼
//!                   ┌───────────────┐
//!                   │   validate    │──► InvalidOrder
//!                   └───────┬───────┘
//!                           ▼
//!                   ┌───────────────┐
//!                   │  compliance   │──► InsufficientFunds / InsufficientHoldings
//!                   └───────┬───────┘
//!                           ▼
//!                   ┌───────────────┐
//!                   │ create_order  │──► Repository
//!                   └───────┬───────┘
//!                           ▼
//!                        OrderId
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use brokerx_order_manager::{OrderPlacementWorkflow, PlaceOrderCommand};
//!
//! let workflow = OrderPlacementWorkflow::new(compliance, orders, clock);
//! let id = workflow
//!     .submit(&identity, PlaceOrderCommand::limit_buy("AAPL", 10, dec!(150)))
//!     .await?;
//! ```

pub mod error;
pub mod placement;

pub use error::PlaceOrderError;
pub use placement::{OrderPlacementWorkflow, PlaceOrderCommand};
