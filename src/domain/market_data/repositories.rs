use crate::domain::errors::DashboardResult;
use crate::domain::market_data::{PriceSeries, StockDirectory, Symbol, TimeWindow};

/// Port to the remote stock service.
///
/// Futures are `!Send`: everything runs on the browser event loop.
#[allow(async_fn_in_trait)]
pub trait PriceHistorySource {
    /// Display name → ticker listing. No pagination.
    async fn fetch_stocks(&self) -> DashboardResult<StockDirectory>;

    /// Samples covering the trailing `window`; no minimum sample count is guaranteed.
    async fn fetch_price_history(
        &self,
        symbol: &Symbol,
        window: TimeWindow,
    ) -> DashboardResult<PriceSeries>;
}
