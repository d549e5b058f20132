pub mod configuration;
pub mod contact_client;
pub mod domain;
pub mod error;
pub mod form;
pub mod routes;
pub mod startup;
pub mod telegram_client;
pub mod telemetry;

pub use error::error_chain_fmt;
