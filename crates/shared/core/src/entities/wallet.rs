use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::values::{Price, UserId};

/// Cash balances of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub user_id: UserId,
    /// Spendable balance
    pub available_funds: Price,
    /// Reserved by pending obligations, not spendable
    pub funds_on_hold: Price,
}

impl Wallet {
    pub fn new(user_id: UserId, available_funds: Price, funds_on_hold: Price) -> Self {
        Self {
            user_id,
            available_funds,
            funds_on_hold,
        }
    }

    /// Available plus held funds
    pub fn total_funds(&self) -> Decimal {
        self.available_funds + self.funds_on_hold
    }

    /// True when `amount` can be paid from the available balance
    pub fn can_afford(&self, amount: Decimal) -> bool {
        self.available_funds >= amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    #[test]
    fn test_can_afford_boundary() {
        let wallet = Wallet::new(Uuid::new_v4(), dec!(1500), dec!(100));

        assert!(wallet.can_afford(dec!(1500)));
        assert!(wallet.can_afford(dec!(1499.99)));
        assert!(!wallet.can_afford(dec!(1500.01)));
    }

    #[test]
    fn test_held_funds_are_not_spendable() {
        let wallet = Wallet::new(Uuid::new_v4(), dec!(1000), dec!(600));

        assert_eq!(wallet.total_funds(), dec!(1600));
        assert!(!wallet.can_afford(dec!(1500)));
    }
}
