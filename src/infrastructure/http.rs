//! HTTP adapter for the evaluation stock service.

pub mod dto;
pub mod stock_service_client;

pub use dto::*;
pub use stock_service_client::*;
