use async_trait::async_trait;
use brokerx_core::{Order, OrderAction, Position};
use brokerx_ports::{ComplianceCheck, ComplianceError, PositionRepository, WalletRepository};
use log::{debug, info};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Funds and holdings gate for new orders
pub struct ComplianceEngine<W, P>
where
    W: WalletRepository,
    P: PositionRepository,
{
    wallet_repo: Arc<W>,
    position_repo: Arc<P>,
}

impl<W, P> ComplianceEngine<W, P>
where
    W: WalletRepository,
    P: PositionRepository,
{
    pub fn new(wallet_repo: Arc<W>, position_repo: Arc<P>) -> Self {
        Self {
            wallet_repo,
            position_repo,
        }
    }

    async fn verify_buy(&self, order: &Order) -> Result<(), ComplianceError> {
        let wallet = self.wallet_repo.find_by_user_id(order.user_id).await?;
        let (required, affordable) = match order.notional() {
            Some(required) => (required, wallet.can_afford(required)),
            // Out of Decimal range is beyond any wallet
            None => (Decimal::MAX, false),
        };

        if !affordable {
            info!(
                "Buy rejected: user={}, symbol={}, required={}, available={}",
                order.user_id, order.symbol, required, wallet.available_funds
            );
            return Err(ComplianceError::InsufficientFunds {
                required,
                available: wallet.available_funds,
            });
        }

        debug!(
            "Buy compliant: user={}, symbol={}, required={}, available={}",
            order.user_id, order.symbol, required, wallet.available_funds
        );
        Ok(())
    }

    async fn verify_sell(&self, order: &Order) -> Result<(), ComplianceError> {
        let positions = self
            .position_repo
            .find_by_user_id_and_symbol(order.user_id, &order.symbol)
            .await?;
        let owned = Position::total_quantity(&positions);

        if owned < order.quantity {
            info!(
                "Sell rejected: user={}, symbol={}, requested={}, owned={}",
                order.user_id, order.symbol, order.quantity, owned
            );
            return Err(ComplianceError::InsufficientHoldings {
                symbol: order.symbol.clone(),
                requested: order.quantity,
                owned,
            });
        }

        debug!(
            "Sell compliant: user={}, symbol={}, requested={}, owned={} across {} rows",
            order.user_id,
            order.symbol,
            order.quantity,
            owned,
            positions.len()
        );
        Ok(())
    }
}

#[async_trait]
impl<W, P> ComplianceCheck for ComplianceEngine<W, P>
where
    W: WalletRepository,
    P: PositionRepository,
{
    async fn verify_order_compliance(&self, order: &Order) -> Result<(), ComplianceError> {
        match order.action {
            OrderAction::Buy => self.verify_buy(order).await,
            OrderAction::Sell => self.verify_sell(order).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brokerx_core::{OrderType, TimeInForce, Wallet};
    use brokerx_persistence::{InMemoryPositionRepository, InMemoryWalletRepository};
    use brokerx_ports::RepositoryError;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    type Engine = ComplianceEngine<InMemoryWalletRepository, InMemoryPositionRepository>;

    fn make_order(action: OrderAction) -> Order {
        Order::new(
            Uuid::new_v4(),
            "AAPL",
            OrderType::Market,
            action,
            10,
            dec!(150.00),
            TimeInForce::DAY,
        )
    }

    fn setup() -> (Arc<InMemoryWalletRepository>, Arc<InMemoryPositionRepository>, Engine) {
        let wallets = Arc::new(InMemoryWalletRepository::new());
        let positions = Arc::new(InMemoryPositionRepository::new());
        let engine = ComplianceEngine::new(Arc::clone(&wallets), Arc::clone(&positions));
        (wallets, positions, engine)
    }

    #[tokio::test]
    async fn test_verify_buy_order_success() {
        let (wallets, _, engine) = setup();
        let order = make_order(OrderAction::Buy);
        wallets.insert(Wallet::new(order.user_id, dec!(1600), dec!(100)));

        assert_eq!(engine.verify_order_compliance(&order).await, Ok(()));
    }

    #[tokio::test]
    async fn test_verify_buy_order_exact_funds_is_enough() {
        let (wallets, _, engine) = setup();
        let order = make_order(OrderAction::Buy);
        wallets.insert(Wallet::new(order.user_id, dec!(1500), dec!(0)));

        assert_eq!(engine.verify_order_compliance(&order).await, Ok(()));
    }

    #[tokio::test]
    async fn test_verify_buy_order_non_compliance() {
        let (wallets, _, engine) = setup();
        let order = make_order(OrderAction::Buy);
        wallets.insert(Wallet::new(order.user_id, dec!(1495), dec!(100)));

        let err = engine.verify_order_compliance(&order).await.unwrap_err();

        assert_eq!(
            err,
            ComplianceError::InsufficientFunds {
                required: dec!(1500),
                available: dec!(1495),
            }
        );
    }

    #[tokio::test]
    async fn test_buy_with_out_of_range_cost_is_refused() {
        let (wallets, _, engine) = setup();
        let order = Order {
            quantity: u64::MAX,
            unit_price: dec!(10000000000),
            ..make_order(OrderAction::Buy)
        };
        wallets.insert(Wallet::new(order.user_id, Decimal::MAX, dec!(0)));

        let err = engine.verify_order_compliance(&order).await.unwrap_err();

        assert!(matches!(err, ComplianceError::InsufficientFunds { .. }));
    }

    #[tokio::test]
    async fn test_sell_against_saturated_holdings() {
        let (_, positions, engine) = setup();
        let order = Order {
            quantity: u64::MAX,
            ..make_order(OrderAction::Sell)
        };
        positions.insert(Position::new(order.user_id, "AAPL", u64::MAX, dec!(1)));
        positions.insert(Position::new(order.user_id, "AAPL", 1, dec!(1)));

        assert_eq!(engine.verify_order_compliance(&order).await, Ok(()));
    }

    #[tokio::test]
    async fn test_funds_on_hold_do_not_count() {
        let (wallets, _, engine) = setup();
        let order = make_order(OrderAction::Buy);
        wallets.insert(Wallet::new(order.user_id, dec!(1000), dec!(5000)));

        let err = engine.verify_order_compliance(&order).await.unwrap_err();

        assert!(matches!(err, ComplianceError::InsufficientFunds { .. }));
    }

    #[tokio::test]
    async fn test_verify_buy_order_missing_wallet_propagates() {
        let (_, _, engine) = setup();
        let order = make_order(OrderAction::Buy);

        let err = engine.verify_order_compliance(&order).await.unwrap_err();

        assert!(matches!(
            err,
            ComplianceError::Repository(RepositoryError::NotFound { entity: "wallet", .. })
        ));
    }

    #[tokio::test]
    async fn test_verify_sell_order_success() {
        let (_, positions, engine) = setup();
        let order = make_order(OrderAction::Sell);
        positions.insert(Position::new(order.user_id, "AAPL", 11, dec!(120)));

        assert_eq!(engine.verify_order_compliance(&order).await, Ok(()));
    }

    #[tokio::test]
    async fn test_verify_sell_order_sums_position_rows() {
        let (_, positions, engine) = setup();
        let order = make_order(OrderAction::Sell);
        positions.insert(Position::new(order.user_id, "AAPL", 6, dec!(120)));
        positions.insert(Position::new(order.user_id, "AAPL", 4, dec!(130)));
        // Other symbols never count
        positions.insert(Position::new(order.user_id, "MSFT", 100, dec!(300)));

        assert_eq!(engine.verify_order_compliance(&order).await, Ok(()));
    }

    #[tokio::test]
    async fn test_verify_sell_order_non_compliance() {
        let (_, _, engine) = setup();
        let order = make_order(OrderAction::Sell);

        let err = engine.verify_order_compliance(&order).await.unwrap_err();

        assert_eq!(
            err,
            ComplianceError::InsufficientHoldings {
                symbol: "AAPL".to_string(),
                requested: 10,
                owned: 0,
            }
        );
        assert!(err.to_string().starts_with("not enough owned stocks"));
    }

    #[tokio::test]
    async fn test_sell_ignores_other_users_positions() {
        let (_, positions, engine) = setup();
        let order = make_order(OrderAction::Sell);
        positions.insert(Position::new(Uuid::new_v4(), "AAPL", 50, dec!(120)));

        let err = engine.verify_order_compliance(&order).await.unwrap_err();

        assert!(matches!(err, ComplianceError::InsufficientHoldings { owned: 0, .. }));
    }

    #[tokio::test]
    async fn test_checks_do_not_mutate_state() {
        let (wallets, positions, engine) = setup();
        let buy = make_order(OrderAction::Buy);
        let wallet = Wallet::new(buy.user_id, dec!(2000), dec!(0));
        wallets.insert(wallet.clone());
        positions.insert(Position::new(buy.user_id, "AAPL", 10, dec!(120)));
        let sell = Order {
            action: OrderAction::Sell,
            ..buy.clone()
        };

        engine.verify_order_compliance(&buy).await.unwrap();
        engine.verify_order_compliance(&sell).await.unwrap();

        assert_eq!(wallets.find_by_user_id(buy.user_id).await.unwrap(), wallet);
        let held = positions
            .find_by_user_id_and_symbol(buy.user_id, "AAPL")
            .await
            .unwrap();
        assert_eq!(Position::total_quantity(&held), 10);
    }
}
