//! Normalized quote record produced for every requested symbol.
//!
//! A `QuoteRecord` is created once by a fetch worker, moved to the aggregator over
//! the result channel and then to the report renderer. It is never mutated after
//! creation. A price or change of `0.0` doubles as the "unavailable" sentinel, so a
//! failed fetch renders exactly like a symbol whose real change is zero; `status`
//! keeps the difference visible to logging only.
use strum_macros::Display;

/// Outcome of the fetch that produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FetchStatus {
    /// Both fields decoded from the provider response.
    Ok,
    /// The envelope decoded but one or both numeric fields fell back to `0.0`.
    Partial,
    /// Transport or decode failure; both fields are sentinels.
    Failed,
}

/// Price and percent change for one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRecord {
    /// Uppercased, alias-resolved ticker symbol.
    pub symbol: String,
    /// Last price, `0.0` when unavailable.
    pub price: f64,
    /// Percent change for the trading period, `0.0` when unavailable.
    pub change_percent: f64,
    /// How the record was obtained.
    pub status: FetchStatus,
}

impl QuoteRecord {
    /// Creates a record from decoded values.
    pub fn new(symbol: &str, price: f64, change_percent: f64, status: FetchStatus) -> Self {
        QuoteRecord {
            symbol: String::from(symbol),
            price,
            change_percent,
            status,
        }
    }

    /// Creates the sentinel record emitted when a fetch fails.
    pub fn unavailable(symbol: &str) -> Self {
        Self::new(symbol, 0.0, 0.0, FetchStatus::Failed)
    }

    /// Whether the change is rendered with the non-negative treatment.
    ///
    /// Zero counts as non-negative, including the sentinel.
    pub fn is_non_negative(&self) -> bool {
        self.change_percent >= 0.0
    }
}
