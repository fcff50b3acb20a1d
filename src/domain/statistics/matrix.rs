use serde::Serialize;
use std::collections::HashMap;

use super::correlation::compute_correlation;
use crate::domain::market_data::Symbol;

/// Square, row-major correlation table.
///
/// Rows and columns follow the symbol order the matrix was built with, never
/// the iteration order of a hash map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    symbols: Vec<Symbol>,
    values: Vec<f64>,
}

impl CorrelationMatrix {
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn index_of(&self, symbol: &Symbol) -> Option<usize> {
        self.symbols.iter().position(|candidate| candidate == symbol)
    }

    /// Coefficient at (`row`, `column`); `None` when out of bounds.
    pub fn at(&self, row: usize, column: usize) -> Option<f64> {
        let size = self.len();
        if row >= size || column >= size {
            return None;
        }
        self.values.get(row * size + column).copied()
    }

    pub fn get(&self, left: &Symbol, right: &Symbol) -> Option<f64> {
        self.at(self.index_of(left)?, self.index_of(right)?)
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        let size = self.len();
        if row >= size {
            return None;
        }
        Some(&self.values[row * size..(row + 1) * size])
    }

    /// Row-major values, the layout heatmap widgets expect.
    pub fn flattened(&self) -> &[f64] {
        &self.values
    }
}

/// Correlates every ordered pair of `symbols`, self-pairs included.
///
/// O(K²·L) for K symbols of length L; nothing is cached between calls. A
/// symbol absent from `series_by_symbol` is treated as an empty series.
pub fn build_correlation_matrix(
    symbols: &[Symbol],
    series_by_symbol: &HashMap<Symbol, Vec<f64>>,
) -> CorrelationMatrix {
    let empty: Vec<f64> = Vec::new();
    let series: Vec<&[f64]> = symbols
        .iter()
        .map(|symbol| series_by_symbol.get(symbol).unwrap_or(&empty).as_slice())
        .collect();

    let mut values = Vec::with_capacity(symbols.len() * symbols.len());
    for left in &series {
        for right in &series {
            values.push(compute_correlation(left, right));
        }
    }

    CorrelationMatrix { symbols: symbols.to_vec(), values }
}
