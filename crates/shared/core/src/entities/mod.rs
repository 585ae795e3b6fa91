mod identity;
mod order;
mod order_action;
mod order_status;
mod order_type;
mod position;
mod time_in_force;
mod user;
mod wallet;

pub use identity::AuthenticatedUser;
pub use order::Order;
pub use order_action::OrderAction;
pub use order_status::OrderStatus;
pub use order_type::OrderType;
pub use position::Position;
pub use time_in_force::TimeInForce;
pub use user::{LockoutState, User};
pub use wallet::Wallet;
