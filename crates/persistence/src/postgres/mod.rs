//! PostgreSQL adapters
//!
//! All adapters share one connection pool; build it with [`connect`] and
//! create the tables with [`migrate`].

mod order;
mod position;
mod user;
mod wallet;

pub use order::PgOrderRepository;
pub use position::PgPositionRepository;
pub use user::PgUserRepository;
pub use wallet::PgWalletRepository;

use brokerx_ports::{RepositoryError, RepositoryResult};
use log::info;
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Open a connection pool
pub async fn connect(database_url: &str, max_connections: u32) -> RepositoryResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map_err(backend)?;

    info!("Connected to PostgreSQL");
    Ok(pool)
}

/// Run the bundled migrations
pub async fn migrate(pool: &PgPool) -> RepositoryResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(backend)?;
    info!("Database migrations completed");
    Ok(())
}

pub(crate) fn backend(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Backend(err.to_string())
}

/// Map `RowNotFound` to a typed not-found error, anything else to a backend error
pub(crate) fn lookup_error(entity: &'static str, key: impl ToString, err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::RowNotFound => RepositoryError::not_found(entity, key),
        other => backend(other),
    }
}
