use brokerx_core::Timestamp;
use brokerx_ports::Clock;
use chrono::{Duration, Utc};
use parking_lot::RwLock;
use std::sync::Arc;

/// Clock frozen at a given instant
///
/// Time only moves through [`FixedClock::advance`] or [`FixedClock::set_time`].
/// Clones share the same instant, so a test can keep a handle while the
/// service under test owns another.
#[derive(Debug, Clone)]
pub struct FixedClock {
    current: Arc<RwLock<Timestamp>>,
}

impl FixedClock {
    pub fn new(time: Timestamp) -> Self {
        Self {
            current: Arc::new(RwLock::new(time)),
        }
    }

    /// Freeze at the current wall-clock time
    pub fn at_now() -> Self {
        Self::new(Utc::now())
    }

    pub fn advance(&self, duration: Duration) {
        *self.current.write() += duration;
    }

    pub fn set_time(&self, time: Timestamp) {
        *self.current.write() = time;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.current.read()
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
