//! BrokerX Ports
//!
//! Port definitions (traits) for the BrokerX brokerage.
//! These define the boundaries between the domain services and infrastructure:
//! storage, time, credential checks and security observability.

mod clock;
mod compliance;
mod error;
mod order_repository;
mod password;
mod position_repository;
mod security;
mod user_repository;
mod wallet_repository;

pub use clock::Clock;
pub use compliance::ComplianceCheck;
pub use error::{ComplianceError, RepositoryError, RepositoryResult};
pub use order_repository::OrderRepository;
pub use password::PasswordVerifier;
pub use position_repository::PositionRepository;
pub use security::{SecurityEvent, SecurityEventSink};
pub use user_repository::UserRepository;
pub use wallet_repository::WalletRepository;
