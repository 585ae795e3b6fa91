//! BrokerX Persistence
//!
//! Implementations of the repository ports:
//!
//! - **In-memory** (`InMemory*Repository`): `DashMap`-backed, for tests,
//!   demos and simulation
//! - **PostgreSQL** (`Pg*Repository`): `sqlx` adapters sharing one `PgPool`
//!
//! Every adapter is cheap to clone; clones share the same storage.

pub mod in_memory;
pub mod postgres;

pub use in_memory::{
    InMemoryOrderRepository, InMemoryPositionRepository, InMemoryUserRepository,
    InMemoryWalletRepository,
};
pub use postgres::{
    PgOrderRepository, PgPositionRepository, PgUserRepository, PgWalletRepository, connect,
    migrate,
};
