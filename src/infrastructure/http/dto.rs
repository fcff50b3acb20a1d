use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::{
    errors::{DashboardError, DashboardResult},
    logging::LogComponent,
    market_data::{Price, PriceSample, PriceSeries, StockDirectory, Symbol, Timestamp},
};

/// `GET /stocks` body. The map keeps the service's key order.
#[derive(Debug, Deserialize)]
struct StocksResponse {
    stocks: serde_json::Map<String, serde_json::Value>,
}

/// One quote as sent on the wire
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceDto {
    pub price: f64,
    #[serde(rename = "lastUpdatedAt")]
    pub last_updated_at: DateTime<Utc>,
}

/// `GET /stocks/{ticker}` body
#[derive(Debug, Deserialize)]
struct LatestPriceResponse {
    stock: PriceDto,
}

impl PriceDto {
    pub fn to_domain(&self) -> DashboardResult<PriceSample> {
        let millis = u64::try_from(self.last_updated_at.timestamp_millis()).map_err(|_| {
            DashboardError::Decode(format!(
                "Quote timestamp {} is before the Unix epoch",
                self.last_updated_at
            ))
        })?;
        Ok(PriceSample::new(Price::from(self.price), Timestamp::from_millis(millis)))
    }
}

/// Parses the stock list. Entries whose ticker is not a non-empty string are
/// skipped with a warning rather than failing the whole list.
pub fn parse_stock_list(body: &str) -> DashboardResult<StockDirectory> {
    let response: StocksResponse = serde_json::from_str(body)?;

    let mut entries = Vec::with_capacity(response.stocks.len());
    for (name, ticker) in response.stocks {
        match ticker.as_str().map(Symbol::new) {
            Some(Ok(symbol)) => entries.push((name, symbol)),
            _ => {
                crate::log_warn!(
                    LogComponent::Infrastructure("StockService"),
                    "Skipping stock {:?} with invalid ticker {}",
                    name,
                    ticker
                );
            }
        }
    }

    Ok(StockDirectory::new(entries))
}

/// Parses a price history. A quote with a bad price or timestamp is dropped
/// with a warning; the rest of the history survives.
pub fn parse_price_history(body: &str) -> DashboardResult<PriceSeries> {
    let quotes: Vec<serde_json::Value> = serde_json::from_str(body)?;

    let mut samples = Vec::with_capacity(quotes.len());
    for (index, quote) in quotes.into_iter().enumerate() {
        let sample = serde_json::from_value::<PriceDto>(quote)
            .map_err(DashboardError::from)
            .and_then(|dto| dto.to_domain());
        match sample {
            Ok(sample) => samples.push(sample),
            Err(error) => {
                crate::log_warn!(
                    LogComponent::Infrastructure("StockService"),
                    "Skipping quote #{}: {}",
                    index,
                    error
                );
            }
        }
    }

    Ok(PriceSeries::new(samples))
}

pub fn parse_latest_price(body: &str) -> DashboardResult<PriceSample> {
    let response: LatestPriceResponse = serde_json::from_str(body)?;
    response.stock.to_domain()
}
