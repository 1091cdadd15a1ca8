//! Error types shared by the library and the `mq` binary.
//!
//! The `MqError` enum unifies the failure cases of the quote pipeline: reading
//! symbol sources, talking to the provider over HTTP, decoding its JSON envelope,
//! and collecting results from the worker threads. Per-symbol failures never
//! leave the fetch worker as errors; they are logged and collapsed into sentinel
//! records, so only input and aggregation errors reach `main`.
use std::io;
use std::num::ParseFloatError;

use thiserror::Error;

/// Unified error type for the workspace.
#[derive(Error, Debug)]
pub enum MqError {
    /// I/O error originating from the standard library (symbol files, stdout).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport-level failure reported by the HTTP client (DNS, connect, TLS, timeout).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP status {status} from {url}")]
    HttpStatus {
        /// Numeric status code.
        status: u16,
        /// Request URL with the API key masked.
        url: String,
    },

    /// Failure while decoding the provider's JSON body.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The provider returned one of its own error/notice envelopes.
    #[error("Provider message: {0}")]
    Provider(String),

    /// The quote envelope was missing or empty.
    #[error("Missing quote envelope for symbol {0}")]
    MissingEnvelope(String),

    /// A numeric field of the quote could not be parsed.
    #[error("Invalid {field} value {value:?}: {source}")]
    FieldParse {
        /// Name of the field being parsed.
        field: &'static str,
        /// Raw text received from the provider.
        value: String,
        /// Underlying float parse error.
        #[source]
        source: ParseFloatError,
    },

    /// The request URL could not be assembled from the base URL.
    #[error("Invalid provider URL: {0}")]
    Url(String),

    /// A `FROM=TO` alias argument was malformed.
    #[error("Invalid alias {0:?}: expected FROM=TO")]
    Alias(String),

    /// No symbols were supplied on the command line or in the symbol file.
    #[error("No symbols provided")]
    EmptySymbols,

    /// The result channel closed before every worker reported back.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),
}
