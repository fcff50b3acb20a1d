use std::time::Duration;

use crate::application::refresh_loop::REFRESH_INTERVAL;
use crate::domain::market_data::TimeWindow;

/// Root of the evaluation stock service
pub const DEFAULT_BASE_URL: &str = "http://20.244.56.144/evaluation-service";

/// Runtime knobs. Everything else is fixed at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub base_url: String,
    pub refresh_interval: Duration,
    pub initial_window: TimeWindow,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            refresh_interval: REFRESH_INTERVAL,
            initial_window: TimeWindow::default(),
        }
    }
}

impl DashboardConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_refresh_interval(mut self, refresh_interval: Duration) -> Self {
        self.refresh_interval = refresh_interval;
        self
    }
}
