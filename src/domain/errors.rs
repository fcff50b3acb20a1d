use derive_more::Display;

/// Error type shared by every layer of the dashboard.
///
/// Numeric degeneracies (empty series, zero variance) are never errors; they are
/// normalised inside `domain::statistics`. Only I/O and input validation end up here.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DashboardError {
    #[display(fmt = "Network Error: {}", _0)]
    Network(String),
    #[display(fmt = "Decode Error: {}", _0)]
    Decode(String),
    #[display(fmt = "Validation Error: {}", _0)]
    Validation(String),
}

impl std::error::Error for DashboardError {}

impl From<serde_json::Error> for DashboardError {
    fn from(error: serde_json::Error) -> Self {
        DashboardError::Decode(error.to_string())
    }
}

impl From<DashboardError> for wasm_bindgen::JsValue {
    fn from(error: DashboardError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
