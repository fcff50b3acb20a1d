use insta::assert_json_snapshot;
use std::collections::HashMap;

use stock_correlation_wasm::domain::chart::{
    HeatmapData, StockDetails, cell_color, correlation_tooltip, hovered_symbol, price_tooltip,
};
use stock_correlation_wasm::domain::market_data::{Symbol, TimeWindow};
use stock_correlation_wasm::domain::statistics::{SymbolStats, build_correlation_matrix};

#[test]
fn time_window_options() {
    assert_json_snapshot!(TimeWindow::options(), @r###"
    [
      {
        "minutes": 15,
        "label": "15 minutes"
      },
      {
        "minutes": 30,
        "label": "30 minutes"
      },
      {
        "minutes": 60,
        "label": "1 hour"
      },
      {
        "minutes": 120,
        "label": "2 hours"
      }
    ]
    "###);
}

#[test]
fn unsupported_window_is_rejected() {
    assert!(TimeWindow::from_minutes(45).is_err());
    assert_eq!(TimeWindow::from_minutes(120).unwrap(), TimeWindow::TwoHours);
    assert_eq!(TimeWindow::default(), TimeWindow::ThirtyMinutes);
}

#[test]
fn heatmap_cells_are_row_major() {
    let symbols = vec![Symbol::from("UP"), Symbol::from("DOWN")];
    let series = HashMap::from([
        (Symbol::from("UP"), vec![1.0, 2.0, 3.0]),
        (Symbol::from("DOWN"), vec![3.0, 2.0, 1.0]),
    ]);
    let heatmap = HeatmapData::from_matrix(&build_correlation_matrix(&symbols, &series));

    assert_eq!(heatmap.size, 2);
    assert_eq!(heatmap.labels, vec!["UP", "DOWN"]);
    let off_diagonal = &heatmap.cells[1];
    assert_eq!((off_diagonal.row, off_diagonal.column), (0, 1));
    assert!(off_diagonal.color.starts_with("rgba(255, 99, 132, "));
    assert_eq!(off_diagonal.tooltip, "Correlation: -1.000");
}

#[test]
fn empty_matrix_has_no_cells_or_hover() {
    let matrix = build_correlation_matrix(&[], &HashMap::new());
    let heatmap = HeatmapData::from_matrix(&matrix);

    assert!(heatmap.cells.is_empty());
    assert_eq!(hovered_symbol(&matrix, 5), None);
}

#[test]
fn hover_index_wraps_by_column() {
    let symbols = vec![Symbol::from("A"), Symbol::from("B"), Symbol::from("C")];
    let matrix = build_correlation_matrix(&symbols, &HashMap::new());

    assert_eq!(hovered_symbol(&matrix, 0), Some(&Symbol::from("A")));
    assert_eq!(hovered_symbol(&matrix, 4), Some(&Symbol::from("B")));
    assert_eq!(hovered_symbol(&matrix, 8), Some(&Symbol::from("C")));
}

#[test]
fn labels_and_colours() {
    assert_eq!(cell_color(0.25), "rgba(75, 192, 192, 0.25)");
    assert_eq!(cell_color(-1.0), "rgba(255, 99, 132, 1)");
    assert_eq!(correlation_tooltip(0.5), "Correlation: 0.500");
    assert_eq!(price_tooltip(12.0), "Price: $12.00");
}

#[test]
fn stock_details_round_to_cents() {
    let stats = SymbolStats {
        symbol: Symbol::from("AAPL"),
        mean: 231.456,
        std_dev: 1.004,
        sample_count: 12,
    };
    let details = StockDetails::new(&stats, "Apple Inc.").unwrap();

    assert_eq!(details.average, "231.46");
    assert_eq!(details.std_dev, "1.00");
    assert_eq!(details.symbol, "AAPL");
}
