use std::collections::HashMap;

use crate::domain::{
    errors::DashboardError,
    logging::LogComponent,
    market_data::{PriceSeries, Symbol, TimeWindow},
    statistics::{CorrelationMatrix, SymbolStats, build_correlation_matrix},
};

/// Identifies the fetch round a result belongs to.
///
/// Generations increase monotonically over the cache's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTag {
    pub generation: u64,
    pub window: TimeWindow,
}

/// Latest price series per tracked symbol for the selected window.
///
/// Mutated only by the refresh cycle; views are recomputed on demand.
#[derive(Debug, Clone)]
pub struct SeriesCache {
    window: TimeWindow,
    symbols: Vec<Symbol>,
    series: HashMap<Symbol, PriceSeries>,
    applied_generation: HashMap<Symbol, u64>,
    generation: u64,
    selection_epoch: u64,
}

impl Default for SeriesCache {
    fn default() -> Self {
        Self::new(TimeWindow::default())
    }
}

impl SeriesCache {
    pub fn new(window: TimeWindow) -> Self {
        Self {
            window,
            symbols: Vec::new(),
            series: HashMap::new(),
            applied_generation: HashMap::new(),
            generation: 0,
            selection_epoch: 0,
        }
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Tracked symbols in display order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Switches window and symbol set, dropping every cached series. Any round
    /// tagged before this call becomes stale.
    pub fn reselect(&mut self, window: TimeWindow, symbols: Vec<Symbol>) {
        self.generation += 1;
        self.selection_epoch = self.generation;
        self.window = window;
        self.symbols = dedup_preserving_order(symbols);
        self.series.clear();
        self.applied_generation.clear();

        crate::log_debug!(
            LogComponent::Application("SeriesCache"),
            "Selection changed: window={}m symbols={} generation={}",
            window.minutes(),
            self.symbols.len(),
            self.generation
        );
    }

    /// Returns `true` and resets the cache when `window` differs from the current one.
    pub fn select_window(&mut self, window: TimeWindow) -> bool {
        if window == self.window {
            return false;
        }
        let symbols = self.symbols.clone();
        self.reselect(window, symbols);
        true
    }

    /// Returns `true` and resets the cache when the symbol set changed.
    pub fn select_symbols(&mut self, symbols: Vec<Symbol>) -> bool {
        let symbols = dedup_preserving_order(symbols);
        if symbols == self.symbols {
            return false;
        }
        self.reselect(self.window, symbols);
        true
    }

    /// Opens a new fetch round for the current selection.
    pub fn begin_round(&mut self) -> RoundTag {
        self.generation += 1;
        RoundTag { generation: self.generation, window: self.window }
    }

    /// Whether results tagged with `tag` may still be written.
    pub fn accepts(&self, tag: RoundTag) -> bool {
        tag.generation >= self.selection_epoch
            && tag.generation <= self.generation
            && tag.window == self.window
    }

    /// Replaces `symbol`'s series with a fetch result.
    ///
    /// Returns `false` when the result is stale: tagged before the current
    /// selection, for another window, for an untracked symbol, or older than
    /// the round already applied for that symbol.
    pub fn apply(&mut self, tag: RoundTag, symbol: &Symbol, series: PriceSeries) -> bool {
        if !self.accepts(tag) || !self.symbols.contains(symbol) {
            crate::log_debug!(
                LogComponent::Application("SeriesCache"),
                "Discarding stale result for {} (round {}, current {})",
                symbol,
                tag.generation,
                self.generation
            );
            return false;
        }
        if self.applied_generation.get(symbol).is_some_and(|&applied| applied > tag.generation) {
            return false;
        }

        self.applied_generation.insert(symbol.clone(), tag.generation);
        self.series.insert(symbol.clone(), series);
        true
    }

    /// Records a failed fetch. The last good series stays in place.
    pub fn record_failure(&self, tag: RoundTag, symbol: &Symbol, error: &DashboardError) {
        crate::log_warn!(
            LogComponent::Application("SeriesCache"),
            "Keeping last known series for {} after failed fetch in round {}: {}",
            symbol,
            tag.generation,
            error
        );
    }

    pub fn series(&self, symbol: &Symbol) -> Option<&PriceSeries> {
        self.series.get(symbol)
    }

    /// Tracked symbols that currently hold a series, in display order.
    pub fn loaded_symbols(&self) -> Vec<Symbol> {
        self.symbols.iter().filter(|symbol| self.series.contains_key(*symbol)).cloned().collect()
    }

    pub fn stats(&self, symbol: &Symbol) -> Option<SymbolStats> {
        self.series
            .get(symbol)
            .map(|series| SymbolStats::from_series(symbol.clone(), series))
    }

    pub fn all_stats(&self) -> Vec<SymbolStats> {
        self.loaded_symbols().into_iter().filter_map(|symbol| self.stats(&symbol)).collect()
    }

    /// All-pairs correlation over the loaded symbols.
    pub fn correlation_matrix(&self) -> CorrelationMatrix {
        let symbols = self.loaded_symbols();
        let prices: HashMap<Symbol, Vec<f64>> = symbols
            .iter()
            .filter_map(|symbol| {
                self.series.get(symbol).map(|series| (symbol.clone(), series.prices()))
            })
            .collect();
        build_correlation_matrix(&symbols, &prices)
    }
}

fn dedup_preserving_order(symbols: Vec<Symbol>) -> Vec<Symbol> {
    let mut unique: Vec<Symbol> = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        if !unique.contains(&symbol) {
            unique.push(symbol);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::{Price, PriceSample, Timestamp};

    fn series(prices: &[f64]) -> PriceSeries {
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| PriceSample::new(Price::from(p), Timestamp::from_millis(i as u64)))
            .collect()
    }

    #[test]
    fn duplicate_symbols_are_tracked_once() {
        let mut cache = SeriesCache::default();
        cache.reselect(
            TimeWindow::OneHour,
            vec![Symbol::from("AAPL"), Symbol::from("MSFT"), Symbol::from("AAPL")],
        );
        assert_eq!(cache.symbols(), &[Symbol::from("AAPL"), Symbol::from("MSFT")]);
    }

    #[test]
    fn same_window_selection_keeps_cache() {
        let mut cache = SeriesCache::new(TimeWindow::ThirtyMinutes);
        cache.reselect(TimeWindow::ThirtyMinutes, vec![Symbol::from("AAPL")]);
        let tag = cache.begin_round();
        assert!(cache.apply(tag, &Symbol::from("AAPL"), series(&[1.0, 2.0])));

        assert!(!cache.select_window(TimeWindow::ThirtyMinutes));
        assert!(cache.series(&Symbol::from("AAPL")).is_some());
    }

    #[test]
    fn tags_from_the_future_are_rejected() {
        let mut cache = SeriesCache::default();
        cache.reselect(TimeWindow::default(), vec![Symbol::from("AAPL")]);
        let forged = RoundTag { generation: 99, window: TimeWindow::default() };
        assert!(!cache.apply(forged, &Symbol::from("AAPL"), series(&[1.0])));
    }
}
