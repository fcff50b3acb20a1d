use stock_correlation_wasm::domain::errors::DashboardError;
use stock_correlation_wasm::domain::market_data::{Symbol, TimeWindow};
use stock_correlation_wasm::infrastructure::http::{
    StockServiceClient, parse_latest_price, parse_price_history, parse_stock_list,
};

#[test]
fn stock_list_keeps_wire_order() {
    let body = r#"{"stocks":{"Nvidia Corporation":"NVDA","Apple Inc.":"AAPL","Broken":"","Amazon.com, Inc.":"AMZN"}}"#;
    let directory = parse_stock_list(body).unwrap();

    assert_eq!(
        directory.symbols(),
        vec![Symbol::from("NVDA"), Symbol::from("AAPL"), Symbol::from("AMZN")]
    );
    assert_eq!(directory.display_name(&Symbol::from("AAPL")), Some("Apple Inc."));
}

#[test]
fn price_history_is_sorted_by_time() {
    let body = r#"[
        {"price": 231.95, "lastUpdatedAt": "2025-05-08T04:26:27.465583965Z"},
        {"price": 229.10, "lastUpdatedAt": "2025-05-08T04:25:27.465583965Z"}
    ]"#;
    let series = parse_price_history(body).unwrap();

    assert_eq!(series.prices(), vec![229.10, 231.95]);
    let first = series.samples()[0].observed_at.value();
    let second = series.samples()[1].observed_at.value();
    assert_eq!(second - first, 60_000);
}

#[test]
fn empty_history_is_an_empty_series() {
    assert!(parse_price_history("[]").unwrap().is_empty());
}

#[test]
fn latest_price_unwraps_stock_field() {
    let body = r#"{"stock":{"price":666.66,"lastUpdatedAt":"2025-05-06T06:27:22.080788Z"}}"#;
    let sample = parse_latest_price(body).unwrap();
    assert_eq!(sample.price.value(), 666.66);
}

#[test]
fn malformed_bodies_are_decode_errors() {
    assert!(matches!(parse_stock_list("{}"), Err(DashboardError::Decode(_))));
    assert!(matches!(parse_price_history(r#"{"price":1.0}"#), Err(DashboardError::Decode(_))));
    assert!(matches!(parse_latest_price(r#"{"stock":null}"#), Err(DashboardError::Decode(_))));
}

#[test]
fn bad_quotes_are_skipped_not_fatal() {
    let body = r#"[
        {"price": 10.0, "lastUpdatedAt": "2025-05-08T04:25:00Z"},
        {"price": "x", "lastUpdatedAt": "2025-05-08T04:26:00Z"},
        {"price": 11.0, "lastUpdatedAt": "yesterday"},
        {"price": 12.0, "lastUpdatedAt": "1969-12-31T23:59:59Z"},
        {"price": 13.0, "lastUpdatedAt": "2025-05-08T04:27:00Z"}
    ]"#;
    let series = parse_price_history(body).unwrap();

    assert_eq!(series.prices(), vec![10.0, 13.0]);
}

#[test]
fn client_builds_service_urls() {
    let client = StockServiceClient::new("http://localhost:9000/evaluation-service/");
    assert_eq!(client.stocks_url(), "http://localhost:9000/evaluation-service/stocks");
    assert_eq!(
        client.price_history_url(&Symbol::from("MSFT"), TimeWindow::OneHour),
        "http://localhost:9000/evaluation-service/stocks/MSFT?minutes=60"
    );
    assert_eq!(
        client.latest_price_url(&Symbol::from("NVDA")),
        "http://localhost:9000/evaluation-service/stocks/NVDA"
    );
}

#[test]
fn listed_ticker_reaches_url_unchanged() {
    let directory = parse_stock_list(r#"{"stocks":{"Berkshire Hathaway Inc.":" brk.b "}}"#).unwrap();
    let symbol = directory.first_symbol().unwrap();
    assert_eq!(symbol.value(), "brk.b");

    let client = StockServiceClient::new("http://h");
    assert_eq!(
        client.price_history_url(symbol, TimeWindow::ThirtyMinutes),
        "http://h/stocks/brk.b?minutes=30"
    );
    assert_eq!(directory.find("BRK.B"), Some(symbol));
    assert_eq!(directory.find("brk.b"), Some(symbol));
    assert_eq!(directory.find("BRK.A"), None);
}
