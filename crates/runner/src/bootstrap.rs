//! Bootstrap - service wiring and demo data
//!
//! Builds the authentication policy and the order placement workflow over a
//! chosen storage backend and makes sure the demo account exists:
//! - In-memory: fresh stores, seeded on every start
//! - PostgreSQL: migrated on connect, seeded only if the account is missing

use brokerx_auth::{AuthenticationPolicy, CredentialError, HmacPasswordHasher, LogEventSink};
use brokerx_clock::SystemClock;
use brokerx_compliance::ComplianceEngine;
use brokerx_core::{Position, Price, Quantity, Symbol, User, Wallet};
use brokerx_order_manager::OrderPlacementWorkflow;
use brokerx_persistence::{
    InMemoryOrderRepository, InMemoryPositionRepository, InMemoryUserRepository,
    InMemoryWalletRepository, PgOrderRepository, PgPositionRepository, PgUserRepository,
    PgWalletRepository,
};
use brokerx_ports::{
    OrderRepository, PositionRepository, RepositoryError, UserRepository, WalletRepository,
};
use log::info;
use rust_decimal_macros::dec;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::config::BrokerConfig;

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("no database configured")]
    NoDatabase,

    #[error("failed to hash demo password: {0}")]
    Credential(#[from] CredentialError),

    #[error("storage setup failed: {0}")]
    Repository(#[from] RepositoryError),
}

/// Account seeded for the demo session
#[derive(Debug, Clone)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
    pub available_funds: Price,
    /// Position rows, one per past purchase
    pub holdings: Vec<(Symbol, Quantity, Price)>,
}

impl Default for DemoAccount {
    fn default() -> Self {
        Self {
            email: "demo@brokerx.local".to_string(),
            password: "brokerx-demo".to_string(),
            available_funds: dec!(1000),
            holdings: vec![
                ("AAPL".to_string(), 4, dec!(120)),
                ("AAPL".to_string(), 5, dec!(135)),
            ],
        }
    }
}

impl DemoAccount {
    fn records(&self, user_id: Uuid) -> Result<(User, Wallet, Vec<Position>), CredentialError> {
        let hash = HmacPasswordHasher::new().hash(&self.password)?;
        let user = User::new(user_id, self.email.clone(), hash);
        let wallet = Wallet::new(user_id, self.available_funds, dec!(0));
        let positions = self
            .holdings
            .iter()
            .map(|(symbol, quantity, price)| {
                Position::new(user_id, symbol.clone(), *quantity, *price)
            })
            .collect();
        Ok((user, wallet, positions))
    }
}

/// Wired domain services over one storage backend
pub struct Services<U, W, P, O>
where
    U: UserRepository,
    W: WalletRepository,
    P: PositionRepository,
    O: OrderRepository,
{
    pub auth: AuthenticationPolicy<U, HmacPasswordHasher, SystemClock, LogEventSink>,
    pub orders: OrderPlacementWorkflow<ComplianceEngine<W, P>, O, SystemClock>,
}

impl<U, W, P, O> Services<U, W, P, O>
where
    U: UserRepository,
    W: WalletRepository,
    P: PositionRepository,
    O: OrderRepository,
{
    pub fn new(
        config: &BrokerConfig,
        users: Arc<U>,
        wallets: Arc<W>,
        positions: Arc<P>,
        orders: Arc<O>,
    ) -> Self {
        let clock = Arc::new(SystemClock::new());

        let auth = AuthenticationPolicy::new(
            users,
            Arc::new(HmacPasswordHasher::new()),
            clock.clone(),
            Arc::new(LogEventSink::new()),
            config.auth,
        );
        let compliance = ComplianceEngine::new(wallets, positions);
        let orders = OrderPlacementWorkflow::new(Arc::new(compliance), orders, clock);

        Self { auth, orders }
    }
}

pub type InMemoryServices = Services<
    InMemoryUserRepository,
    InMemoryWalletRepository,
    InMemoryPositionRepository,
    InMemoryOrderRepository,
>;

pub type PostgresServices =
    Services<PgUserRepository, PgWalletRepository, PgPositionRepository, PgOrderRepository>;

/// Services over fresh in-memory stores holding only the demo account
pub fn in_memory_services(
    config: &BrokerConfig,
    account: &DemoAccount,
) -> Result<(InMemoryServices, InMemoryOrderRepository), BootstrapError> {
    let users = InMemoryUserRepository::new();
    let wallets = InMemoryWalletRepository::new();
    let positions = InMemoryPositionRepository::new();
    let orders = InMemoryOrderRepository::new();

    let (user, wallet, rows) = account.records(Uuid::new_v4())?;
    users.insert(user);
    wallets.insert(wallet);
    for row in rows {
        positions.insert(row);
    }
    info!("Seeded in-memory demo account: {}", account.email);

    let services = Services::new(
        config,
        Arc::new(users),
        Arc::new(wallets),
        Arc::new(positions),
        Arc::new(orders.clone()),
    );
    Ok((services, orders))
}

/// Services over PostgreSQL, seeding the demo account on first start
pub async fn postgres_services(
    config: &BrokerConfig,
    account: &DemoAccount,
) -> Result<PostgresServices, BootstrapError> {
    let url = config
        .database_url
        .as_deref()
        .ok_or(BootstrapError::NoDatabase)?;

    let pool = brokerx_persistence::connect(url, config.max_connections).await?;
    brokerx_persistence::migrate(&pool).await?;

    let users = PgUserRepository::new(pool.clone());
    let wallets = PgWalletRepository::new(pool.clone());
    let positions = PgPositionRepository::new(pool.clone());
    let orders = PgOrderRepository::new(pool);

    match users.find_by_email(&account.email).await {
        Ok(_) => info!("Demo account already present: {}", account.email),
        Err(err) if err.is_not_found() => {
            let (user, wallet, rows) = account.records(Uuid::new_v4())?;
            users.insert(&user).await?;
            wallets.upsert(&wallet).await?;
            for row in &rows {
                positions.insert(row).await?;
            }
            info!("Seeded demo account: {}", account.email);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(Services::new(
        config,
        Arc::new(users),
        Arc::new(wallets),
        Arc::new(positions),
        Arc::new(orders),
    ))
}
