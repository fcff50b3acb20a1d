use wasm_bindgen::prelude::*;

use crate::domain::logging::LogComponent;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;
pub mod view_state;

pub use presentation::StockDashboardApi;

/// Installs the panic hook and the browser logger/clock.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    log_info!(LogComponent::Presentation("Initialize"), "Stock dashboard module ready");
}
