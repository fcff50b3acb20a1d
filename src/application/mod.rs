pub mod config;
pub mod dashboard_service;
pub mod refresh_loop;
pub mod series_cache;

pub use config::*;
pub use dashboard_service::*;
pub use refresh_loop::*;
pub use series_cache::*;
