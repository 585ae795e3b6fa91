//! BrokerX Authentication
//!
//! Login-time credential checks with temporary account lockout:
//!
//! - **Policy**: [`AuthenticationPolicy`] looks the user up, refuses locked
//!   accounts, verifies the password and persists lockout bookkeeping
//! - **Lockout**: [`next_lockout_state`] is the pure transition applied
//!   after each verified attempt
//! - **Credential**: [`HmacPasswordHasher`] is the production password verifier
//! - **Events**: [`LogEventSink`] reports security events through `log`
//!
//! ## Lockout lifecycle
//!
//! ```text
//!  failed (n+1 < retries)        failed (n+1 >= retries)
//!  ┌──────────────┐              ┌───────────────────────────┐
//!  │              ▼              │                           ▼
//! [unlocked, n] ──┴──► [unlocked, n+1] ──────────► [locked until now+duration]
//!       ▲                                                    │
//!       └──────────── success after the lock expires ────────┘
//! ```

pub mod config;
pub mod credential;
pub mod error;
pub mod events;
pub mod lockout;
pub mod policy;

pub use config::{ConfigError, LockoutConfig};
pub use credential::{CredentialError, HmacPasswordHasher};
pub use error::AuthError;
pub use events::LogEventSink;
pub use lockout::{AttemptOutcome, next_lockout_state};
pub use policy::AuthenticationPolicy;
