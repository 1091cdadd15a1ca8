//! Fan-out/fan-in over the symbol list.
//!
//! `QuoteAggregator::fetch_all` spawns one thread per symbol, each running
//! `worker::fetch_quote` and sending its record into a shared `crossbeam_channel`.
//! The aggregator then receives exactly as many records as symbols were requested.
//!
//! Concurrency notes:
//! - No cap on the number of threads; the watch list is expected to be small.
//! - No timeout; a request that never returns stalls the whole run.
//! - Records arrive in completion order. Attribution is by the record's `symbol`
//!   field, never by position.
use std::sync::Arc;
use std::thread;

use crossbeam_channel::unbounded;
use log::{debug, info};

use crate::error::MqError;
use crate::provider::AlphaVantage;
use crate::quote::{FetchStatus, QuoteRecord};
use crate::result::Result;
use crate::transport::QuoteTransport;
use crate::worker::fetch_quote;

/// Runs fetch workers concurrently and collects their records.
pub struct QuoteAggregator {
    provider: Arc<AlphaVantage>,
    transport: Arc<dyn QuoteTransport>,
}

impl QuoteAggregator {
    /// Creates an aggregator sharing `provider` and `transport` across workers.
    pub fn new(provider: AlphaVantage, transport: Arc<dyn QuoteTransport>) -> Self {
        Self {
            provider: Arc::new(provider),
            transport,
        }
    }

    /// Fetches every symbol in parallel and returns one record per symbol, unordered.
    ///
    /// Blocks until all workers have reported. Returns `MqError::ChannelRecv` only if
    /// every sender is gone before the expected count arrived (a worker panicked).
    pub fn fetch_all(&self, symbols: &[String]) -> Result<Vec<QuoteRecord>> {
        let (tx, rx) = unbounded::<QuoteRecord>();

        for symbol in symbols {
            let tx = tx.clone();
            let provider = Arc::clone(&self.provider);
            let transport = Arc::clone(&self.transport);
            let symbol = symbol.clone();
            thread::spawn(move || {
                let record = fetch_quote(&provider, transport.as_ref(), &symbol);
                if let Err(e) = tx.send(record) {
                    debug!("Aggregator gone before {} was delivered: {}", symbol, e);
                }
            });
        }
        drop(tx);

        let mut records = Vec::with_capacity(symbols.len());
        for received in 0..symbols.len() {
            let record = rx.recv().map_err(|e| {
                MqError::ChannelRecv(format!("{} of {} quotes received: {}", received, symbols.len(), e))
            })?;
            records.push(record);
        }

        let failed = records
            .iter()
            .filter(|r| r.status == FetchStatus::Failed)
            .count();
        info!("Collected {} quotes ({} unavailable)", records.len(), failed);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Url;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        calls: AtomicUsize,
    }

    impl QuoteTransport for Counting {
        fn get(&self, _url: &Url) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(String::from(
                r#"{"Global Quote":{"05. price":"10.00","10. change percent":"1.00%"}}"#,
            ))
        }
    }

    struct Panicking;

    impl QuoteTransport for Panicking {
        fn get(&self, url: &Url) -> Result<String> {
            if url.as_str().contains("symbol=BOOM") {
                panic!("worker blew up");
            }
            Ok(String::from(
                r#"{"Global Quote":{"05. price":"1.00","10. change percent":"0.00%"}}"#,
            ))
        }
    }

    fn symbols(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn provider() -> AlphaVantage {
        AlphaVantage::new("http://quotes.test/query", "k")
    }

    #[test]
    fn one_request_and_one_record_per_symbol() {
        let transport = Arc::new(Counting {
            calls: AtomicUsize::new(0),
        });
        let aggregator = QuoteAggregator::new(provider(), transport.clone());

        let records = aggregator
            .fetch_all(&symbols(&["IBM", "AAPL", "IBM", "MSFT"]))
            .unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 4);
        assert_eq!(records.iter().filter(|r| r.symbol == "IBM").count(), 2);
    }

    #[test]
    fn empty_list_spawns_nothing() {
        let transport = Arc::new(Counting {
            calls: AtomicUsize::new(0),
        });
        let aggregator = QuoteAggregator::new(provider(), transport.clone());

        assert!(aggregator.fetch_all(&[]).unwrap().is_empty());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn panicked_worker_is_reported() {
        let aggregator = QuoteAggregator::new(provider(), Arc::new(Panicking));

        let err = aggregator
            .fetch_all(&symbols(&["IBM", "BOOM"]))
            .unwrap_err();

        assert!(matches!(err, MqError::ChannelRecv(_)));
    }
}
