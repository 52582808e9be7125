//! Domain types: money value objects, the customer and the payer port.

pub mod customer;
pub mod money;
pub mod payment;
pub mod ports;
