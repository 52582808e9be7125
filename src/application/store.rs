use crate::domain::money::Amount;
use crate::domain::payment::Payment;
use crate::domain::ports::Payer;
use tracing::info;

/// A store that asks its customers for payment.
///
/// `Store` only talks to the `Payer` it is handed: it asks it to pay and then
/// asks it for the remaining balance. It has no idea how the payer keeps its money.
#[derive(Debug, Clone)]
pub struct Store {
    name: String,
}

impl Store {
    /// Creates a new `Store` identified by `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Requests `amount` from `customer`.
    ///
    /// The customer passed in is not modified. The returned `Payment` holds the
    /// post-payment customer and whether the debit was settled.
    pub fn process_payment<P: Payer>(&self, customer: &P, amount: Amount) -> Payment<P> {
        info!("Store '{}' is requesting payment...", self.name);

        let payment = customer.pay(amount);

        let remaining = payment.payer.balance();
        info!(
            "Payment processed. {} has ${} left.",
            payment.payer.name(),
            remaining
        );

        payment
    }
}
