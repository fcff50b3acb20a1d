use leptos::*;
use stock_correlation_wasm::domain::market_data::{Symbol, TimeWindow};
use stock_correlation_wasm::view_state::DashboardViewState;

#[test]
fn selections_report_changes() {
    let view = DashboardViewState::new(TimeWindow::ThirtyMinutes);

    assert!(view.select_symbol(Symbol::from("AAPL")));
    assert!(!view.select_symbol(Symbol::from("AAPL")));
    assert!(view.select_window(TimeWindow::FifteenMinutes));
    assert!(!view.select_window(TimeWindow::FifteenMinutes));

    assert_eq!(view.selected_symbol(), Some(Symbol::from("AAPL")));
    assert_eq!(view.time_window.get_untracked(), TimeWindow::FifteenMinutes);
}

#[test]
fn hover_can_be_cleared() {
    let view = DashboardViewState::default();
    view.hover(Some(Symbol::from("MSFT")));
    assert_eq!(view.hovered_symbol(), Some(Symbol::from("MSFT")));
    view.hover(None);
    assert_eq!(view.hovered_symbol(), None);
}

#[test]
fn revision_is_monotonic() {
    let view = DashboardViewState::default();
    let copy = view;
    assert_eq!(view.bump_revision(), 1);
    assert_eq!(copy.bump_revision(), 2);
    assert_eq!(view.revision(), 2);
}
