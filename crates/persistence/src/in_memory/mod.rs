mod order;
mod position;
mod user;
mod wallet;

pub use order::InMemoryOrderRepository;
pub use position::InMemoryPositionRepository;
pub use user::InMemoryUserRepository;
pub use wallet::InMemoryWalletRepository;
