//!
//! Concurrent market quote lookup shared by the `mq` binary and its tests.
//!
//! This crate aggregates:
//! - `error` — unified error type `MqError` used across the workspace.
//! - `result` — handy `Result<T, MqError>` alias.
//! - `quote` — the normalized `QuoteRecord`.
//! - `provider` — Alpha Vantage URL building and response decoding.
//! - `transport` — `QuoteTransport` seam and the blocking `reqwest` implementation.
//! - `worker` — one fetch per symbol, failures collapsed into sentinel records.
//! - `aggregator` — thread-per-symbol fan-out with channel fan-in.
//! - `report` — sorted, aligned, colored table output.
//! - `symbols` — symbol sources, normalization and aliases.
//! - `config` — immutable run configuration.
#![warn(missing_docs)]
pub mod aggregator;
pub mod config;
pub mod error;
pub mod provider;
pub mod quote;
pub mod report;
pub mod result;
pub mod symbols;
pub mod transport;
pub mod worker;

use std::io::Write;
use std::sync::Arc;

pub use aggregator::QuoteAggregator;
pub use config::Config;
pub use error::MqError;
pub use quote::QuoteRecord;
pub use result::Result;
pub use transport::{HttpTransport, QuoteTransport};

use crate::report::ReportRenderer;

/// Fetches every configured symbol through `transport` and writes the report to `out`.
pub fn run<W: Write>(config: &Config, transport: Arc<dyn QuoteTransport>, out: &mut W) -> Result<()> {
    let aggregator = QuoteAggregator::new(config.provider(), transport);
    let records = aggregator.fetch_all(&config.symbols)?;
    ReportRenderer::new(config.color).write_report(records, out)
}
