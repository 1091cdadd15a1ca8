//! Alpha Vantage `GLOBAL_QUOTE` adapter.
//!
//! This module owns everything that depends on the provider's wire format:
//! - `AlphaVantage::request_url` — builds the query URL for one symbol.
//! - `decode_response` — unwraps the `"Global Quote"` envelope into raw field text.
//! - `parse_price` / `parse_change_percent` — numeric parsing of those fields.
//! - `AlphaVantage::to_record` — combines the above into a `QuoteRecord`, letting a
//!   malformed field fall back to `0.0` without discarding the other one.
//!
//! The rest of the crate only sees `QuoteRecord`s.
use log::warn;
use reqwest::Url;
use serde::Deserialize;

use crate::error::MqError;
use crate::quote::{FetchStatus, QuoteRecord};
use crate::result::Result;

/// Default query endpoint.
pub const BASE_URL: &str = "https://www.alphavantage.co/query";
/// Placeholder key accepted by the provider for its demo symbols.
pub const DEFAULT_API_KEY: &str = "demo";
/// Provider function returning the latest quote for a symbol.
const FUNCTION: &str = "GLOBAL_QUOTE";

/// Top-level response. Alpha Vantage reports problems through sibling keys
/// instead of HTTP status codes.
#[derive(Debug, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuoteFields>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GlobalQuoteFields {
    #[serde(rename = "05. price")]
    price: Option<String>,
    #[serde(rename = "10. change percent")]
    change_percent: Option<String>,
}

/// Undecoded field text taken from the quote envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawQuote {
    /// Price text, e.g. `"123.4500"`.
    pub price: String,
    /// Change text including the trailing percent sign, e.g. `"-2.3000%"`.
    pub change_percent: String,
}

/// Connection settings for the Alpha Vantage API.
#[derive(Debug, Clone)]
pub struct AlphaVantage {
    base_url: String,
    api_key: String,
}

impl AlphaVantage {
    /// Creates an adapter for the given endpoint and key.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        AlphaVantage {
            base_url: String::from(base_url),
            api_key: String::from(api_key),
        }
    }

    /// Builds the request URL for `symbol`.
    pub fn request_url(&self, symbol: &str) -> Result<Url> {
        build_request_url(&self.base_url, symbol, &self.api_key)
    }

    /// Renders `url` for logs with the API key masked.
    pub fn redact(&self, url: &Url) -> String {
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| {
                let v = if k == "apikey" { String::from("***") } else { v.into_owned() };
                (k.into_owned(), v)
            })
            .collect();

        let mut masked = url.clone();
        masked.query_pairs_mut().clear().extend_pairs(pairs);
        masked.to_string()
    }

    /// Decodes `body` into a record for `symbol`.
    ///
    /// Envelope errors are returned; a field that does not parse is logged and set to
    /// `0.0`, and the record is marked `Partial`.
    pub fn to_record(&self, symbol: &str, body: &str) -> Result<QuoteRecord> {
        let raw = decode_response(symbol, body)?;
        let mut status = FetchStatus::Ok;

        let price = parse_price(&raw.price).unwrap_or_else(|e| {
            warn!("{}: {}", symbol, e);
            status = FetchStatus::Partial;
            0.0
        });
        let change_percent = parse_change_percent(&raw.change_percent).unwrap_or_else(|e| {
            warn!("{}: {}", symbol, e);
            status = FetchStatus::Partial;
            0.0
        });

        Ok(QuoteRecord::new(symbol, price, change_percent, status))
    }
}

/// Builds `<base_url>?function=GLOBAL_QUOTE&symbol=<symbol>&apikey=<api_key>`.
///
/// The symbol is not validated; query values are percent-encoded.
pub fn build_request_url(base_url: &str, symbol: &str, api_key: &str) -> Result<Url> {
    let params = [("function", FUNCTION), ("symbol", symbol), ("apikey", api_key)];
    Url::parse_with_params(base_url, &params).map_err(|e| MqError::Url(format!("{}: {}", base_url, e)))
}

/// Unwraps the provider envelope into raw field text.
///
/// A missing field inside a present envelope comes back as an empty string so that
/// only that field fails numeric parsing.
pub fn decode_response(symbol: &str, body: &str) -> Result<RawQuote> {
    let response: GlobalQuoteResponse = serde_json::from_str(body)?;

    if let Some(msg) = response
        .error_message
        .or(response.note)
        .or(response.information)
    {
        return Err(MqError::Provider(msg));
    }

    match response.global_quote {
        Some(GlobalQuoteFields {
            price: None,
            change_percent: None,
        })
        | None => Err(MqError::MissingEnvelope(String::from(symbol))),
        Some(fields) => Ok(RawQuote {
            price: fields.price.unwrap_or_default(),
            change_percent: fields.change_percent.unwrap_or_default(),
        }),
    }
}

/// Parses the price text.
pub fn parse_price(text: &str) -> Result<f64> {
    parse_field("price", text.trim())
}

/// Parses the change-percent text after stripping trailing `%` signs.
pub fn parse_change_percent(text: &str) -> Result<f64> {
    parse_field("change percent", text.trim().trim_end_matches('%'))
}

fn parse_field(field: &'static str, text: &str) -> Result<f64> {
    text.parse::<f64>().map_err(|source| MqError::FieldParse {
        field,
        value: String::from(text),
        source,
    })
}
