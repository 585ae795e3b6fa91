//! BrokerX Clock Infrastructure
//!
//! Time sources for the domain services:
//!
//! - [`SystemClock`]: wall-clock time for production
//! - [`FixedClock`]: frozen time that only moves when told to, for deterministic tests
//!
//! ## Usage
//!
//! ```ignore
//! use brokerx_clock::{Clock, FixedClock};
//! use chrono::Duration;
//!
//! let clock = FixedClock::new(start);
//! let before = clock.now();
//! clock.advance(Duration::minutes(30));
//! assert_eq!(clock.now() - before, Duration::minutes(30));
//! ```

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use brokerx_ports::Clock;
