use serde::Serialize;

use crate::domain::market_data::{PriceSeries, Symbol};

/// Arithmetic mean. `NaN` for an empty slice (0 / 0).
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance: squared deviations averaged over N, not N - 1.
pub fn population_variance(values: &[f64]) -> f64 {
    let mean = mean(values);
    values.iter().map(|value| (value - mean).powi(2)).sum::<f64>() / values.len() as f64
}

/// Mean and population standard deviation of `values`.
///
/// Empty input yields `(NaN, NaN)`; callers must check before display.
pub fn mean_and_std_dev(values: &[f64]) -> (f64, f64) {
    (mean(values), population_variance(values).sqrt())
}

/// Derived per-symbol figures, recomputed whenever the owning series changes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolStats {
    pub symbol: Symbol,
    pub mean: f64,
    pub std_dev: f64,
    pub sample_count: usize,
}

impl SymbolStats {
    pub fn from_series(symbol: Symbol, series: &PriceSeries) -> Self {
        let prices = series.prices();
        let (mean, std_dev) = mean_and_std_dev(&prices);
        Self { symbol, mean, std_dev, sample_count: prices.len() }
    }

    /// False when the series was empty and both figures are `NaN`.
    pub fn is_defined(&self) -> bool {
        self.mean.is_finite() && self.std_dev.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_formula_divides_by_n() {
        let (mean, std_dev) = mean_and_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(mean, 5.0);
        assert_eq!(std_dev, 2.0);
    }

    #[test]
    fn empty_input_is_not_a_number() {
        let (mean, std_dev) = mean_and_std_dev(&[]);
        assert!(mean.is_nan());
        assert!(std_dev.is_nan());
    }

    #[test]
    fn single_value_has_zero_spread() {
        assert_eq!(mean_and_std_dev(&[42.5]), (42.5, 0.0));
    }

    #[test]
    fn stats_for_empty_series_are_undefined() {
        let stats = SymbolStats::from_series(Symbol::from("AAPL"), &PriceSeries::empty());
        assert!(!stats.is_defined());
        assert_eq!(stats.sample_count, 0);
    }
}
