//! Single-symbol fetch worker.
//!
//! `fetch_quote` never fails: transport errors, decode errors and field parse errors
//! all end up as a `QuoteRecord`, with sentinel values where data is missing. The
//! aggregator therefore receives exactly one record per worker and needs no error
//! branch of its own.
use log::{debug, warn};

use crate::error::MqError;
use crate::provider::AlphaVantage;
use crate::quote::QuoteRecord;
use crate::result::Result;
use crate::transport::QuoteTransport;

/// Fetches and decodes the quote for `symbol`.
///
/// Failures are logged and replaced by `QuoteRecord::unavailable(symbol)`.
pub fn fetch_quote(provider: &AlphaVantage, transport: &dyn QuoteTransport, symbol: &str) -> QuoteRecord {
    match try_fetch(provider, transport, symbol) {
        Ok(record) => {
            debug!(
                "{}: price={:.2} change={:.2}% ({})",
                record.symbol, record.price, record.change_percent, record.status
            );
            record
        }
        Err(e) => {
            match &e {
                MqError::Http(_) | MqError::HttpStatus { .. } | MqError::Url(_) => {
                    debug!("{}: request failed: {}", symbol, e)
                }
                _ => warn!("{}: {}", symbol, e),
            }
            QuoteRecord::unavailable(symbol)
        }
    }
}

fn try_fetch(provider: &AlphaVantage, transport: &dyn QuoteTransport, symbol: &str) -> Result<QuoteRecord> {
    let url = provider.request_url(symbol)?;
    debug!("Requesting {}", provider.redact(&url));
    let body = transport.get(&url)?;
    provider.to_record(symbol, &body)
}
