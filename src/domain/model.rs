use serde::{Deserialize, Serialize};

/// One watchlist item: an exchange-local stock code and the price at or above
/// which a notification fires. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub code: String,
    pub target: f64,
}

impl WatchlistEntry {
    /// Quote-API symbol for this entry, e.g. code `2330` with suffix `TW`
    /// becomes `2330.TW`.
    pub fn symbol(&self, suffix: &str) -> String {
        format!("{}.{}", self.code, suffix)
    }
}

/// Snapshot returned by one fetch. Not cached across entries or runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
}
