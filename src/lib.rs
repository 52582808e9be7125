pub mod application;
pub mod cli;
pub mod coupled;
pub mod domain;
pub mod error;
pub mod interfaces;
pub mod logging;
