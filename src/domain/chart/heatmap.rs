use serde::Serialize;

use crate::domain::market_data::Symbol;
use crate::domain::statistics::{CorrelationMatrix, SymbolStats};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub row: usize,
    pub column: usize,
    pub value: f64,
    pub color: String,
    pub tooltip: String,
}

/// Correlation heatmap laid out row-major, axis labels in matrix order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeatmapData {
    pub labels: Vec<String>,
    pub size: usize,
    pub cells: Vec<HeatmapCell>,
}

impl HeatmapData {
    pub fn from_matrix(matrix: &CorrelationMatrix) -> Self {
        let size = matrix.len();
        let cells = matrix
            .flattened()
            .iter()
            .enumerate()
            .map(|(index, &value)| HeatmapCell {
                row: index / size,
                column: index % size,
                value,
                color: cell_color(value),
                tooltip: correlation_tooltip(value),
            })
            .collect();

        Self {
            labels: matrix.symbols().iter().map(|symbol| symbol.value().to_string()).collect(),
            size,
            cells,
        }
    }
}

/// Teal for positive correlation, red otherwise; opacity is the magnitude.
pub fn cell_color(value: f64) -> String {
    let alpha = value.abs();
    if value > 0.0 {
        format!("rgba(75, 192, 192, {alpha})")
    } else {
        format!("rgba(255, 99, 132, {alpha})")
    }
}

pub fn correlation_tooltip(value: f64) -> String {
    format!("Correlation: {value:.3}")
}

/// Symbol under a hovered heatmap element. Elements are counted row-major, so
/// the column is `index % size`.
pub fn hovered_symbol(matrix: &CorrelationMatrix, element_index: usize) -> Option<&Symbol> {
    let size = matrix.len();
    if size == 0 {
        return None;
    }
    matrix.symbols().get(element_index % size)
}

/// Caption shown under the heatmap for the hovered stock
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockDetails {
    pub symbol: String,
    pub name: String,
    pub average: String,
    pub std_dev: String,
}

impl StockDetails {
    /// `None` when the stats come from an empty series.
    pub fn new(stats: &SymbolStats, name: &str) -> Option<Self> {
        if !stats.is_defined() {
            return None;
        }
        Some(Self {
            symbol: stats.symbol.value().to_string(),
            name: name.to_string(),
            average: format!("{:.2}", stats.mean),
            std_dev: format!("{:.2}", stats.std_dev),
        })
    }
}
