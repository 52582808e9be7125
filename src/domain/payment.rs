use super::money::{Amount, Balance};

/// What happened to a payment request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaymentOutcome {
    /// The debit went through and left `remaining` in the wallet.
    Settled { remaining: Balance },
    /// The wallet could not cover `requested`; nothing was debited.
    InsufficientFunds { balance: Balance, requested: Amount },
}

impl PaymentOutcome {
    pub fn is_settled(&self) -> bool {
        matches!(self, PaymentOutcome::Settled { .. })
    }
}

/// The payer state after a payment attempt, together with its outcome.
///
/// On `InsufficientFunds` the payer is equal to the one that was asked to pay.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment<P> {
    pub payer: P,
    pub outcome: PaymentOutcome,
}

impl<P> Payment<P> {
    pub fn settled(payer: P, remaining: Balance) -> Self {
        Self {
            payer,
            outcome: PaymentOutcome::Settled { remaining },
        }
    }

    pub fn declined(payer: P, balance: Balance, requested: Amount) -> Self {
        Self {
            payer,
            outcome: PaymentOutcome::InsufficientFunds { balance, requested },
        }
    }

    pub fn into_payer(self) -> P {
        self.payer
    }
}
