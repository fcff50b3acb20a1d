use serde::Serialize;

use crate::domain::market_data::PriceSeries;
use crate::domain::statistics::mean;
use crate::time_utils::format_time_label;

/// Placeholder shown instead of an empty price chart
pub const NO_PRICE_DATA_MESSAGE: &str = "No data available for the selected stock and time interval";

/// Price line plus a flat average line for the selected stock
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartData {
    pub title: String,
    pub labels: Vec<String>,
    pub prices: Vec<f64>,
    pub average: Vec<f64>,
}

impl LineChartData {
    pub fn from_series(display_name: &str, series: &PriceSeries) -> Self {
        let prices = series.prices();
        let average = if prices.is_empty() {
            Vec::new()
        } else {
            vec![mean(&prices); prices.len()]
        };

        Self {
            title: format!("{display_name} Price History"),
            labels: series
                .samples()
                .iter()
                .map(|sample| format_time_label(sample.observed_at.value()))
                .collect(),
            prices,
            average,
        }
    }

    pub fn has_data(&self) -> bool {
        !self.prices.is_empty()
    }
}

/// Tooltip text for a point on the price line
pub fn price_tooltip(price: f64) -> String {
    format!("Price: ${price:.2}")
}
