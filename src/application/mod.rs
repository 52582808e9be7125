//! Application layer: the store that orchestrates a payment.
//!
//! `Store` delegates every balance query and debit to the `Payer` port, so it
//! keeps working whatever shape the customer's data takes.

pub mod store;
