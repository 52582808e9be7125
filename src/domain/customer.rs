use super::money::{Amount, Balance};
use super::payment::Payment;
use super::ports::Payer;
use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

/// The money a customer carries. Only `Customer` ever touches it.
#[derive(Debug, Serialize, PartialEq, Clone)]
struct Wallet {
    money: Balance,
}

/// A customer with a wallet.
///
/// Payments follow an immutable-update policy: `pay` returns a new `Customer`
/// and leaves the receiver as it was. The wallet is owned data, so the derived
/// `Clone` is a full copy and the two values never share state.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Customer {
    name: String,
    wallet: Wallet,
}

impl Customer {
    pub fn new(name: impl Into<String>, opening_balance: Decimal) -> Result<Self, PaymentError> {
        Ok(Self {
            name: name.into(),
            wallet: Wallet {
                money: Balance::new(opening_balance)?,
            },
        })
    }
}

impl Payer for Customer {
    fn name(&self) -> &str {
        &self.name
    }

    fn balance(&self) -> Balance {
        self.wallet.money
    }

    fn pay(&self, amount: Amount) -> Payment<Self> {
        info!("{} is making a payment of ${}", self.name, amount);

        let balance = self.balance();
        match balance.checked_debit(amount) {
            Some(remaining) => {
                let mut updated = self.clone();
                updated.wallet.money = remaining;
                Payment::settled(updated, remaining)
            }
            None => {
                warn!("{} has insufficient funds.", self.name);
                Payment::declined(self.clone(), balance, amount)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::PaymentOutcome;
    use rust_decimal_macros::dec;

    fn bob(balance: Decimal) -> Customer {
        Customer::new("Bob", balance).unwrap()
    }

    fn amount(value: Decimal) -> Amount {
        Amount::new(value).unwrap()
    }

    #[test]
    fn test_balance_is_idempotent() {
        let customer = bob(dec!(100.0));
        let first = customer.balance();
        let second = customer.balance();
        assert_eq!(first, second);
        assert_eq!(customer, bob(dec!(100.0)));
    }

    #[test]
    fn test_pay_with_sufficient_funds() {
        let customer = bob(dec!(100.0));
        let payment = customer.pay(amount(dec!(25.0)));

        assert_eq!(payment.payer.balance().value(), dec!(75.0));
        assert_eq!(payment.payer.name(), "Bob");
        assert_eq!(
            payment.outcome,
            PaymentOutcome::Settled {
                remaining: Balance::new(dec!(75.0)).unwrap()
            }
        );
        // The original value is untouched.
        assert_eq!(customer, bob(dec!(100.0)));
    }

    #[test]
    fn test_pay_exact_balance_empties_wallet() {
        let customer = bob(dec!(25.0));
        let payment = customer.pay(amount(dec!(25.0)));
        assert_eq!(payment.payer.balance(), Balance::ZERO);
        assert!(payment.outcome.is_settled());
    }

    #[test]
    fn test_pay_with_insufficient_funds() {
        let customer = bob(dec!(20.0));
        let payment = customer.pay(amount(dec!(25.0)));

        assert_eq!(payment.payer, customer);
        assert_eq!(
            payment.outcome,
            PaymentOutcome::InsufficientFunds {
                balance: Balance::new(dec!(20.0)).unwrap(),
                requested: amount(dec!(25.0)),
            }
        );
    }

    #[test]
    fn test_pay_zero_is_a_settled_noop() {
        let customer = bob(dec!(10.0));
        let payment = customer.pay(amount(dec!(0)));
        assert_eq!(payment.payer.balance().value(), dec!(10.0));
        assert!(payment.outcome.is_settled());
    }

    #[test]
    fn test_negative_opening_balance_rejected() {
        assert!(matches!(
            Customer::new("Bob", dec!(-1.0)),
            Err(PaymentError::ValidationError(_))
        ));
    }

    #[test]
    fn test_serializes_nested_wallet() {
        let customer = bob(dec!(100.0));
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["name"], "Bob");
        assert_eq!(json["wallet"]["money"], "100.0");
    }

    #[test]
    fn test_repeated_payments_chain_through_return_values() {
        let start = bob(dec!(100.0));
        let after_one = start.pay(amount(dec!(30.0))).into_payer();
        let after_two = after_one.pay(amount(dec!(30.0))).into_payer();

        assert_eq!(start.balance().value(), dec!(100.0));
        assert_eq!(after_one.balance().value(), dec!(70.0));
        assert_eq!(after_two.balance().value(), dec!(40.0));
    }
}
