use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Price and money amounts - uses Decimal for exact arithmetic
pub type Price = Decimal;

/// Share quantity - whole units only
pub type Quantity = u64;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Ticker symbol (e.g. "AAPL")
pub type Symbol = String;

/// Unique identifier for a user account
pub type UserId = Uuid;

/// Order identifier, assigned by persistence on creation
pub type OrderId = i64;
