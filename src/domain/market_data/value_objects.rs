use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::time::Duration;
use strum::{EnumIter, IntoEnumIterator};

use crate::domain::errors::{DashboardError, DashboardResult};

/// Value Object - price quoted by the stock service
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - UTC milliseconds since the Unix epoch
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Deref, Constructor,
    Serialize, Deserialize,
)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn from_millis(value: u64) -> Self {
        Self(value)
    }
}

/// Value Object - ticker symbol, spelled exactly as the stock service sends it
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct Symbol(String);

impl Symbol {
    /// Validated constructor for tickers arriving from the outside world.
    /// Surrounding whitespace is dropped; case is preserved.
    pub fn new(symbol: &str) -> DashboardResult<Self> {
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(DashboardError::Validation("Symbol cannot be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison for user-typed tickers.
    pub fn matches_ignore_case(&self, ticker: &str) -> bool {
        self.0.eq_ignore_ascii_case(ticker.trim())
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Trailing history window requested from the stock service
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, Serialize, Deserialize,
)]
pub enum TimeWindow {
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[default]
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "60m")]
    OneHour,
    #[serde(rename = "120m")]
    TwoHours,
}

impl TimeWindow {
    pub fn minutes(&self) -> u32 {
        match self {
            Self::FifteenMinutes => 15,
            Self::ThirtyMinutes => 30,
            Self::OneHour => 60,
            Self::TwoHours => 120,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FifteenMinutes => "15 minutes",
            Self::ThirtyMinutes => "30 minutes",
            Self::OneHour => "1 hour",
            Self::TwoHours => "2 hours",
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.minutes()) * 60)
    }

    pub fn from_minutes(minutes: u32) -> DashboardResult<Self> {
        Self::iter().find(|window| window.minutes() == minutes).ok_or_else(|| {
            DashboardError::Validation(format!("Unsupported time window: {minutes} minutes"))
        })
    }

    /// Dropdown entries in ascending duration order
    pub fn options() -> Vec<TimeWindowOption> {
        Self::iter()
            .map(|window| TimeWindowOption { minutes: window.minutes(), label: window.label() })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeWindowOption {
    pub minutes: u32,
    pub label: &'static str,
}
