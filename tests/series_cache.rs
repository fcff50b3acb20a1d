use stock_correlation_wasm::application::SeriesCache;
use stock_correlation_wasm::domain::market_data::{
    Price, PriceSample, PriceSeries, Symbol, TimeWindow, Timestamp,
};

fn series(prices: &[f64]) -> PriceSeries {
    prices
        .iter()
        .enumerate()
        .map(|(i, price)| PriceSample::new(Price::from(*price), Timestamp::from_millis(i as u64 * 1_000)))
        .collect()
}

fn tracked_cache() -> SeriesCache {
    let mut cache = SeriesCache::new(TimeWindow::ThirtyMinutes);
    cache.select_symbols(vec![Symbol::from("AAPL"), Symbol::from("MSFT")]);
    cache
}

#[test]
fn tags_from_before_reselect_are_rejected() {
    let mut cache = tracked_cache();
    let old_round = cache.begin_round();

    assert!(cache.select_window(TimeWindow::OneHour));
    assert!(!cache.apply(old_round, &Symbol::from("AAPL"), series(&[1.0, 2.0])));
    assert!(cache.series(&Symbol::from("AAPL")).is_none());

    let new_round = cache.begin_round();
    assert_eq!(new_round.window, TimeWindow::OneHour);
    assert!(cache.apply(new_round, &Symbol::from("AAPL"), series(&[1.0, 2.0])));
}

#[test]
fn same_window_is_not_a_reselect() {
    let mut cache = tracked_cache();
    let round = cache.begin_round();

    assert!(!cache.select_window(TimeWindow::ThirtyMinutes));
    assert!(cache.apply(round, &Symbol::from("AAPL"), series(&[1.0, 2.0])));
}

#[test]
fn older_round_never_overwrites_newer_one() {
    let mut cache = tracked_cache();
    let aapl = Symbol::from("AAPL");
    let first = cache.begin_round();
    let second = cache.begin_round();

    assert!(cache.apply(second, &aapl, series(&[20.0, 21.0])));
    assert!(!cache.apply(first, &aapl, series(&[10.0, 11.0])));
    assert_eq!(cache.series(&aapl).map(PriceSeries::prices), Some(vec![20.0, 21.0]));

    // An older round may still fill in a symbol the newer one has not reached.
    assert!(cache.apply(first, &Symbol::from("MSFT"), series(&[5.0, 6.0])));
}

#[test]
fn untracked_symbols_are_ignored() {
    let mut cache = tracked_cache();
    let round = cache.begin_round();
    assert!(!cache.apply(round, &Symbol::from("TSLA"), series(&[1.0])));
    assert!(cache.loaded_symbols().is_empty());
}

#[test]
fn views_cover_loaded_symbols_in_tracked_order() {
    let mut cache = tracked_cache();
    let round = cache.begin_round();
    cache.apply(round, &Symbol::from("MSFT"), series(&[3.0, 2.0, 1.0]));
    cache.apply(round, &Symbol::from("AAPL"), series(&[1.0, 2.0, 3.0]));

    assert_eq!(cache.loaded_symbols(), vec![Symbol::from("AAPL"), Symbol::from("MSFT")]);

    let stats = cache.all_stats();
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].mean, 2.0);

    let matrix = cache.correlation_matrix();
    let r = matrix.get(&Symbol::from("AAPL"), &Symbol::from("MSFT")).unwrap();
    assert!((r + 1.0).abs() < 1e-9);
}

#[test]
fn reselecting_symbols_drops_old_series() {
    let mut cache = tracked_cache();
    let round = cache.begin_round();
    cache.apply(round, &Symbol::from("AAPL"), series(&[1.0, 2.0]));

    assert!(cache.select_symbols(vec![Symbol::from("NVDA")]));
    assert!(cache.series(&Symbol::from("AAPL")).is_none());
    assert_eq!(cache.symbols(), &[Symbol::from("NVDA")]);
    assert!(cache.correlation_matrix().is_empty());
}
