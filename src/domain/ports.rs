use super::money::{Amount, Balance};
use super::payment::Payment;

/// The only view a store gets of whoever is paying.
///
/// Implementors keep their internal layout private; `pay` never mutates `self`
/// and hands back the post-payment state instead.
pub trait Payer: Sized {
    fn name(&self) -> &str;
    fn balance(&self) -> Balance;
    fn pay(&self, amount: Amount) -> Payment<Self>;
}
