use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::application::{
    refresh_loop::{RefreshHandle, RoundSummary, run_refresh_round, start_refresh_loop},
    series_cache::SeriesCache,
};
use crate::domain::{
    chart::{HeatmapData, LineChartData, StockDetails, hovered_symbol},
    errors::DashboardResult,
    logging::LogComponent,
    market_data::{PriceHistorySource, PriceSeries, StockDirectory, Symbol, TimeWindow},
    statistics::{CorrelationMatrix, SymbolStats},
};

type UpdateCallback = Rc<dyn Fn(&Symbol)>;

/// Owns the series cache, the stock list and the refresh loop, and serves the
/// read-only views the presentation layer pulls.
///
/// All methods take `&self` so the service can sit behind an `Rc` shared with
/// spawned futures; interior borrows never span an await.
pub struct DashboardService<S> {
    source: Rc<S>,
    cache: Rc<RefCell<SeriesCache>>,
    directory: RefCell<StockDirectory>,
    refresh: RefCell<Option<RefreshHandle>>,
    refresh_interval: Duration,
    on_update: RefCell<UpdateCallback>,
}

impl<S> DashboardService<S>
where
    S: PriceHistorySource + 'static,
{
    pub fn new(source: S, initial_window: TimeWindow, refresh_interval: Duration) -> Self {
        Self {
            source: Rc::new(source),
            cache: Rc::new(RefCell::new(SeriesCache::new(initial_window))),
            directory: RefCell::new(StockDirectory::default()),
            refresh: RefCell::new(None),
            refresh_interval,
            on_update: RefCell::new(Rc::new(|_: &Symbol| {})),
        }
    }

    /// Callback fired after every series write. Takes effect on the next
    /// loop (re)start.
    pub fn set_on_update<F>(&self, callback: F)
    where
        F: Fn(&Symbol) + 'static,
    {
        *self.on_update.borrow_mut() = Rc::new(callback);
    }

    /// Fetches the stock list and tracks every listed symbol.
    pub async fn load_stocks(&self) -> DashboardResult<usize> {
        let directory = self.source.fetch_stocks().await?;
        let count = directory.len();
        let symbols = directory.symbols();
        *self.directory.borrow_mut() = directory;

        let changed = self.cache.borrow_mut().select_symbols(symbols);
        crate::log_info!(
            LogComponent::Application("DashboardService"),
            "Loaded {} stocks (selection changed: {})",
            count,
            changed
        );
        if changed && self.is_running() {
            self.restart();
        }
        Ok(count)
    }

    pub fn start(&self) {
        self.restart();
    }

    pub fn stop(&self) {
        if let Some(handle) = self.refresh.borrow_mut().take() {
            handle.stop();
            crate::log_info!(LogComponent::Application("DashboardService"), "Refresh stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.refresh.borrow().as_ref().is_some_and(|handle| !handle.is_stopped())
    }

    /// Switches the history window. A running loop restarts so the new window
    /// is fetched right away instead of at the next tick.
    pub fn select_window(&self, window: TimeWindow) -> bool {
        let changed = self.cache.borrow_mut().select_window(window);
        if changed && self.is_running() {
            self.restart();
        }
        changed
    }

    /// One fetch round outside the timer, e.g. for a manual refresh.
    pub async fn refresh_now(&self) -> RoundSummary {
        let on_update = Rc::clone(&self.on_update.borrow());
        run_refresh_round(self.source.as_ref(), &self.cache, |symbol| on_update(symbol)).await
    }

    fn restart(&self) {
        let on_update = Rc::clone(&self.on_update.borrow());
        let handle = start_refresh_loop(
            Rc::clone(&self.source),
            Rc::clone(&self.cache),
            self.refresh_interval,
            move |symbol| on_update(symbol),
        );
        // The replaced handle aborts its loop on drop.
        *self.refresh.borrow_mut() = Some(handle);
    }

    pub fn window(&self) -> TimeWindow {
        self.cache.borrow().window()
    }

    pub fn generation(&self) -> u64 {
        self.cache.borrow().generation()
    }

    pub fn directory(&self) -> StockDirectory {
        self.directory.borrow().clone()
    }

    pub fn display_name(&self, symbol: &Symbol) -> String {
        self.directory
            .borrow()
            .display_name(symbol)
            .map(str::to_string)
            .unwrap_or_else(|| symbol.value().to_string())
    }

    pub fn stats(&self, symbol: &Symbol) -> Option<SymbolStats> {
        self.cache.borrow().stats(symbol)
    }

    pub fn all_stats(&self) -> Vec<SymbolStats> {
        self.cache.borrow().all_stats()
    }

    pub fn correlation_matrix(&self) -> CorrelationMatrix {
        self.cache.borrow().correlation_matrix()
    }

    pub fn line_chart(&self, symbol: &Symbol) -> LineChartData {
        let name = self.display_name(symbol);
        let cache = self.cache.borrow();
        let series = cache.series(symbol).cloned().unwrap_or_else(PriceSeries::empty);
        LineChartData::from_series(&name, &series)
    }

    pub fn heatmap(&self) -> HeatmapData {
        HeatmapData::from_matrix(&self.correlation_matrix())
    }

    /// Symbol under heatmap element `element_index`, if any.
    pub fn symbol_at_cell(&self, element_index: usize) -> Option<Symbol> {
        hovered_symbol(&self.correlation_matrix(), element_index).cloned()
    }

    pub fn stock_details(&self, symbol: &Symbol) -> Option<StockDetails> {
        let stats = self.stats(symbol)?;
        StockDetails::new(&stats, &self.display_name(symbol))
    }
}
