//! BrokerX Runner
//!
//! Everything needed to stand the brokerage core up as a process:
//!
//! - **Config**: [`BrokerConfig`] from the environment or a JSON file
//! - **Bootstrap**: wires the domain services over in-memory or PostgreSQL
//!   storage and seeds a demo account
//! - **Session**: a scripted walk through login and order placement that
//!   logs every outcome

pub mod bootstrap;
pub mod config;
pub mod session;

pub use bootstrap::{BootstrapError, DemoAccount, Services, in_memory_services, postgres_services};
pub use config::{BrokerConfig, ConfigError};
pub use session::{SessionReport, SessionStep, StepOutcome, run_demo_session};
