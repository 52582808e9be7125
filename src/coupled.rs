//! The coupled design: the store reaches through the customer into its wallet.
//!
//! Kept side by side with `application::store` to show what the delegation buys.
//! `CoupledStore` depends on `customer.wallet.money` by name and mutates it in
//! place, so every holder of the customer observes the debit and a rename of
//! either field breaks the store.

use crate::domain::money::{Amount, Balance};
use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CoupledWallet {
    pub money: Balance,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CoupledCustomer {
    pub name: String,
    pub wallet: CoupledWallet,
}

impl CoupledCustomer {
    pub fn new(name: impl Into<String>, opening_balance: Decimal) -> Result<Self, PaymentError> {
        Ok(Self {
            name: name.into(),
            wallet: CoupledWallet {
                money: Balance::new(opening_balance)?,
            },
        })
    }
}

#[derive(Debug, Clone)]
pub struct CoupledStore {
    name: String,
}

impl CoupledStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Debits `customer` in place and returns the same, now mutated, customer.
    pub fn process_payment<'a>(
        &self,
        customer: &'a mut CoupledCustomer,
        amount: Amount,
    ) -> &'a CoupledCustomer {
        info!("Store '{}' is processing payment...", self.name);

        match customer.wallet.money.checked_debit(amount) {
            Some(remaining) => customer.wallet.money = remaining,
            None => warn!("Error: Insufficient funds in wallet."),
        }

        // The store never learns whether the wallet accepted the debit, so it
        // reports success either way; only the warning above tells them apart.
        let remaining = customer.wallet.money;
        info!(
            "Payment successful. {} has ${} left.",
            customer.name, remaining
        );

        customer
    }
}
