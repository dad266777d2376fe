use crate::domain::money::Balance;
use crate::error::CheckoutError;
use serde::{Deserialize, Serialize};

/// A customer with a spendable balance.
///
/// The balance is only ever mutated through [`Customer::withdraw_balance`],
/// which refuses to let it go negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub balance: Balance,
}

impl Customer {
    pub fn new(balance: Balance) -> Self {
        Self { balance }
    }

    /// Debits `amount` from the balance if sufficient funds are available.
    pub fn withdraw_balance(&mut self, amount: Balance) -> Result<(), CheckoutError> {
        if self.balance >= amount {
            self.balance -= amount;
            Ok(())
        } else {
            Err(CheckoutError::InsufficientBalance {
                balance: self.balance,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_withdraw_success() {
        let mut customer = Customer::new(Balance::new(dec!(10.0)));

        let result = customer.withdraw_balance(Balance::new(dec!(4.0)));
        assert!(result.is_ok());
        assert_eq!(customer.balance, Balance::new(dec!(6.0)));
    }

    #[test]
    fn test_withdraw_exact_balance() {
        let mut customer = Customer::new(Balance::new(dec!(10.0)));

        let result = customer.withdraw_balance(Balance::new(dec!(10.0)));
        assert!(result.is_ok());
        assert_eq!(customer.balance, Balance::ZERO);
    }

    #[test]
    fn test_withdraw_insufficient() {
        let mut customer = Customer::new(Balance::new(dec!(10.0)));

        let result = customer.withdraw_balance(Balance::new(dec!(20.0)));
        assert!(matches!(
            result,
            Err(CheckoutError::InsufficientBalance { balance }) if balance == Balance::new(dec!(10.0))
        ));
        assert_eq!(customer.balance, Balance::new(dec!(10.0)));
    }
}
