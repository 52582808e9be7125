use demeter_pay::domain::money::{Amount, Balance};
use demeter_pay::domain::payment::Payment;
use demeter_pay::domain::ports::Payer;
use rust_decimal::Decimal;

/// A payer that stores its funds as a prepaid credit line instead of a wallet.
///
/// Nothing in it is named `wallet` or `money`, so a store that works with it
/// cannot be relying on `Customer`'s layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PrepaidCard {
    pub holder: String,
    credit_line: Vec<Decimal>,
}

impl PrepaidCard {
    pub fn new(holder: &str, credit: Decimal) -> Self {
        Self {
            holder: holder.to_string(),
            credit_line: vec![credit],
        }
    }

    fn credit(&self) -> Decimal {
        self.credit_line.iter().sum()
    }
}

impl Payer for PrepaidCard {
    fn name(&self) -> &str {
        &self.holder
    }

    fn balance(&self) -> Balance {
        Balance::new(self.credit()).unwrap_or(Balance::ZERO)
    }

    fn pay(&self, amount: Amount) -> Payment<Self> {
        let balance = self.balance();
        match balance.checked_debit(amount) {
            Some(remaining) => {
                let mut updated = self.clone();
                updated.credit_line.push(-amount.value());
                Payment::settled(updated, remaining)
            }
            None => Payment::declined(self.clone(), balance, amount),
        }
    }
}
