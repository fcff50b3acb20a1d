use gloo::net::http::Request;

use super::dto::{parse_latest_price, parse_price_history, parse_stock_list};
use crate::application::config::DEFAULT_BASE_URL;
use crate::domain::{
    errors::{DashboardError, DashboardResult},
    logging::LogComponent,
    market_data::{PriceHistorySource, PriceSample, PriceSeries, StockDirectory, Symbol, TimeWindow},
};

/// gloo-based client for the stock service
#[derive(Debug, Clone)]
pub struct StockServiceClient {
    base_url: String,
}

impl Default for StockServiceClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl StockServiceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn stocks_url(&self) -> String {
        format!("{}/stocks", self.base_url)
    }

    pub fn price_history_url(&self, symbol: &Symbol, window: TimeWindow) -> String {
        format!("{}/stocks/{}?minutes={}", self.base_url, symbol.value(), window.minutes())
    }

    pub fn latest_price_url(&self, symbol: &Symbol) -> String {
        format!("{}/stocks/{}", self.base_url, symbol.value())
    }

    async fn get_text(&self, url: &str) -> DashboardResult<String> {
        crate::log_debug!(LogComponent::Infrastructure("StockService"), "GET {}", url);

        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DashboardError::Network(format!("Request to {url} failed: {e:?}")))?;

        if !response.ok() {
            return Err(DashboardError::Network(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| DashboardError::Network(format!("Failed to read response: {e:?}")))
    }

    /// Most recent quote for one ticker.
    pub async fn fetch_latest_price(&self, symbol: &Symbol) -> DashboardResult<PriceSample> {
        let body = self.get_text(&self.latest_price_url(symbol)).await?;
        parse_latest_price(&body)
    }
}

impl PriceHistorySource for StockServiceClient {
    async fn fetch_stocks(&self) -> DashboardResult<StockDirectory> {
        let body = self.get_text(&self.stocks_url()).await?;
        let directory = parse_stock_list(&body)?;
        crate::log_info!(
            LogComponent::Infrastructure("StockService"),
            "Fetched {} listed stocks",
            directory.len()
        );
        Ok(directory)
    }

    async fn fetch_price_history(
        &self,
        symbol: &Symbol,
        window: TimeWindow,
    ) -> DashboardResult<PriceSeries> {
        let body = self.get_text(&self.price_history_url(symbol, window)).await?;
        let series = parse_price_history(&body)?;
        crate::log_debug!(
            LogComponent::Infrastructure("StockService"),
            "Fetched {} samples for {} over {}",
            series.len(),
            symbol,
            window.label()
        );
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_service_layout() {
        let client = StockServiceClient::new("http://localhost:8080/evaluation-service/");
        let symbol = Symbol::from("brk.b");

        assert_eq!(client.stocks_url(), "http://localhost:8080/evaluation-service/stocks");
        assert_eq!(
            client.price_history_url(&symbol, TimeWindow::FifteenMinutes),
            "http://localhost:8080/evaluation-service/stocks/brk.b?minutes=15"
        );
        assert_eq!(
            client.latest_price_url(&symbol),
            "http://localhost:8080/evaluation-service/stocks/brk.b"
        );
    }

    #[test]
    fn default_client_targets_evaluation_service() {
        assert_eq!(StockServiceClient::default().base_url(), DEFAULT_BASE_URL);
    }
}
