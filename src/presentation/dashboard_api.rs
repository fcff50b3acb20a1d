use js_sys::{Function, Promise};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::application::{DashboardConfig, DashboardService};
use crate::domain::{
    errors::{DashboardError, DashboardResult},
    logging::LogComponent,
    market_data::{Symbol, TimeWindow},
};
use crate::infrastructure::StockServiceClient;
use crate::view_state::DashboardViewState;

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(DashboardError::from)?;
    js_sys::JSON::parse(&json)
}

/// Stock dashboard facade for the JS front end.
///
/// Views are pulled on demand; register `onUpdate` to learn when to re-pull.
#[wasm_bindgen]
pub struct StockDashboardApi {
    service: Rc<DashboardService<StockServiceClient>>,
    client: StockServiceClient,
    view: DashboardViewState,
    listener: Rc<RefCell<Option<Function>>>,
}

#[wasm_bindgen]
impl StockDashboardApi {
    /// `base_url` defaults to the evaluation service; `refresh_seconds` to 30.
    #[wasm_bindgen(constructor)]
    pub fn new(base_url: Option<String>, refresh_seconds: Option<u32>) -> StockDashboardApi {
        let mut config = DashboardConfig::default();
        if let Some(base_url) = base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(seconds) = refresh_seconds.filter(|seconds| *seconds > 0) {
            config = config.with_refresh_interval(Duration::from_secs(u64::from(seconds)));
        }
        Self::with_config(config)
    }

    #[wasm_bindgen(js_name = onUpdate)]
    pub fn on_update(&self, callback: Function) {
        *self.listener.borrow_mut() = Some(callback);
    }

    /// Loads the stock list, selects the first stock if none is selected and
    /// starts auto-refresh. Resolves to the number of listed stocks.
    pub fn start(&self) -> Promise {
        let service = Rc::clone(&self.service);
        let view = self.view;
        future_to_promise(async move {
            let count = match service.load_stocks().await {
                Ok(count) => count,
                Err(error) => {
                    crate::log_error!(
                        LogComponent::Presentation("DashboardApi"),
                        "Dashboard start failed: {}",
                        error
                    );
                    return Err(JsValue::from(error));
                }
            };
            if view.selected_symbol().is_none() {
                if let Some(first) = service.directory().first_symbol().cloned() {
                    view.select_symbol(first);
                }
            }
            service.start();
            Ok(JsValue::from(count as u32))
        })
    }

    /// Most recent quote for `ticker`, resolved as `{ price, observed_at }`.
    #[wasm_bindgen(js_name = latestPrice)]
    pub fn latest_price(&self, ticker: &str) -> Result<Promise, JsValue> {
        let symbol = self.known_symbol(ticker)?;
        let client = self.client.clone();
        Ok(future_to_promise(async move {
            let sample = client.fetch_latest_price(&symbol).await?;
            to_js(&sample)
        }))
    }

    pub fn stop(&self) {
        self.service.stop();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.service.is_running()
    }

    /// One round outside the timer. Resolves to the number of series written.
    #[wasm_bindgen(js_name = refreshNow)]
    pub fn refresh_now(&self) -> Promise {
        let service = Rc::clone(&self.service);
        future_to_promise(async move {
            let summary = service.refresh_now().await;
            Ok(JsValue::from(summary.applied as u32))
        })
    }

    /// Returns `true` when the window changed and a refetch was triggered.
    #[wasm_bindgen(js_name = selectWindow)]
    pub fn select_window(&self, minutes: u32) -> Result<bool, JsValue> {
        let window = TimeWindow::from_minutes(minutes)?;
        self.view.select_window(window);
        Ok(self.service.select_window(window))
    }

    #[wasm_bindgen(js_name = selectStock)]
    pub fn select_stock(&self, ticker: &str) -> Result<(), JsValue> {
        let symbol = self.known_symbol(ticker)?;
        self.view.select_symbol(symbol);
        Ok(())
    }

    /// Marks the stock under heatmap element `index` as hovered and returns
    /// its ticker.
    #[wasm_bindgen(js_name = hoverCell)]
    pub fn hover_cell(&self, index: usize) -> Option<String> {
        let symbol = self.service.symbol_at_cell(index);
        let ticker = symbol.as_ref().map(|symbol| symbol.value().to_string());
        self.view.hover(symbol);
        ticker
    }

    #[wasm_bindgen(js_name = clearHover)]
    pub fn clear_hover(&self) {
        self.view.hover(None);
    }

    #[wasm_bindgen(js_name = timeWindows)]
    pub fn time_windows(&self) -> Result<JsValue, JsValue> {
        to_js(&TimeWindow::options())
    }

    #[wasm_bindgen(js_name = selectedWindow)]
    pub fn selected_window(&self) -> u32 {
        self.view.time_window().minutes()
    }

    #[wasm_bindgen(js_name = selectedStock)]
    pub fn selected_stock(&self) -> Option<String> {
        self.view.selected_symbol().map(|symbol| symbol.value().to_string())
    }

    pub fn stocks(&self) -> Result<JsValue, JsValue> {
        to_js(&self.service.directory())
    }

    /// `null` until a series for `ticker` has landed.
    #[wasm_bindgen(js_name = statsFor)]
    pub fn stats_for(&self, ticker: &str) -> Result<JsValue, JsValue> {
        let symbol = self.known_symbol(ticker)?;
        match self.service.stats(&symbol) {
            Some(stats) => to_js(&stats),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = allStats)]
    pub fn all_stats(&self) -> Result<JsValue, JsValue> {
        to_js(&self.service.all_stats())
    }

    #[wasm_bindgen(js_name = correlationMatrix)]
    pub fn correlation_matrix(&self) -> Result<JsValue, JsValue> {
        to_js(&self.service.correlation_matrix())
    }

    /// Price chart for the selected stock, `null` when nothing is selected.
    #[wasm_bindgen(js_name = lineChart)]
    pub fn line_chart(&self) -> Result<JsValue, JsValue> {
        match self.view.selected_symbol() {
            Some(symbol) => to_js(&self.service.line_chart(&symbol)),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn heatmap(&self) -> Result<JsValue, JsValue> {
        to_js(&self.service.heatmap())
    }

    #[wasm_bindgen(js_name = hoveredStock)]
    pub fn hovered_stock(&self) -> Result<JsValue, JsValue> {
        match self.view.hovered_symbol().and_then(|symbol| self.service.stock_details(&symbol)) {
            Some(details) => to_js(&details),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn revision(&self) -> f64 {
        self.view.revision() as f64
    }
}

impl StockDashboardApi {
    pub fn with_config(config: DashboardConfig) -> Self {
        let client = StockServiceClient::new(config.base_url.clone());
        let service = Rc::new(DashboardService::new(
            client.clone(),
            config.initial_window,
            config.refresh_interval,
        ));
        let view = DashboardViewState::new(config.initial_window);
        let listener: Rc<RefCell<Option<Function>>> = Rc::new(RefCell::new(None));

        let callback = Rc::clone(&listener);
        service.set_on_update(move |symbol: &Symbol| {
            let revision = view.bump_revision();
            let Some(function) = callback.borrow().clone() else {
                return;
            };
            let result = function.call2(
                &JsValue::NULL,
                &JsValue::from_str(symbol.value()),
                &JsValue::from_f64(revision as f64),
            );
            if let Err(error) = result {
                crate::log_warn!(
                    LogComponent::Presentation("DashboardApi"),
                    "onUpdate callback threw: {:?}",
                    error
                );
            }
        });

        crate::log_info!(
            LogComponent::Presentation("DashboardApi"),
            "Dashboard created for {} (refresh every {}s)",
            config.base_url,
            config.refresh_interval.as_secs()
        );

        Self { service, client, view, listener }
    }

    /// Resolves user input to the listed ticker, ignoring case. Before the
    /// stock list is loaded any non-empty ticker is taken as typed.
    fn known_symbol(&self, ticker: &str) -> DashboardResult<Symbol> {
        let symbol = Symbol::new(ticker)?;
        let directory = self.service.directory();
        if directory.is_empty() {
            return Ok(symbol);
        }
        directory
            .find(symbol.value())
            .cloned()
            .ok_or_else(|| DashboardError::Validation(format!("Unknown stock: {symbol}")))
    }
}
