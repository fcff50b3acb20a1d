use super::value_objects::{Price, Symbol, Timestamp};
use serde::{Deserialize, Serialize};

/// One observed quote. Immutable once received.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    pub price: Price,
    pub observed_at: Timestamp,
}

impl PriceSample {
    pub fn new(price: Price, observed_at: Timestamp) -> Self {
        Self { price, observed_at }
    }
}

/// Price history for one symbol, always ordered by `observed_at` ascending.
///
/// Replaced wholesale on every completed fetch; there is no incremental merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceSeries {
    samples: Vec<PriceSample>,
}

impl PriceSeries {
    /// Builds a series, sorting samples chronologically. Samples sharing a
    /// timestamp keep their arrival order.
    pub fn new(mut samples: Vec<PriceSample>) -> Self {
        samples.sort_by_key(|sample| sample.observed_at);
        Self { samples }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[PriceSample] {
        &self.samples
    }

    pub fn prices(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.price.value()).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&PriceSample> {
        self.samples.last()
    }
}

impl FromIterator<PriceSample> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = PriceSample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A listed stock: display name plus ticker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockListing {
    pub name: String,
    pub symbol: Symbol,
}

/// Stock list as returned by the service, in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StockDirectory {
    listings: Vec<StockListing>,
}

impl StockDirectory {
    /// Duplicate tickers keep the first display name seen.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Symbol)>,
    {
        let mut listings: Vec<StockListing> = Vec::new();
        for (name, symbol) in entries {
            if listings.iter().any(|listing| listing.symbol == symbol) {
                continue;
            }
            listings.push(StockListing { name, symbol });
        }
        Self { listings }
    }

    pub fn listings(&self) -> &[StockListing] {
        &self.listings
    }

    pub fn symbols(&self) -> Vec<Symbol> {
        self.listings.iter().map(|listing| listing.symbol.clone()).collect()
    }

    pub fn display_name(&self, symbol: &Symbol) -> Option<&str> {
        self.listings
            .iter()
            .find(|listing| &listing.symbol == symbol)
            .map(|listing| listing.name.as_str())
    }

    pub fn first_symbol(&self) -> Option<&Symbol> {
        self.listings.first().map(|listing| &listing.symbol)
    }

    /// Listed ticker for user input: an exact match first, then ignoring case.
    pub fn find(&self, ticker: &str) -> Option<&Symbol> {
        let ticker = ticker.trim();
        let symbols = || self.listings.iter().map(|listing| &listing.symbol);
        symbols()
            .find(|symbol| symbol.value() == ticker)
            .or_else(|| symbols().find(|symbol| symbol.matches_ignore_case(ticker)))
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.listings.iter().any(|listing| &listing.symbol == symbol)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
