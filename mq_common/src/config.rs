//! Immutable run configuration.
//!
//! Built once at startup from command-line values and passed by reference into the
//! pipeline.
use crate::error::MqError;
use crate::provider::AlphaVantage;
use crate::report::ColorMode;
use crate::result::Result;
use crate::symbols::AliasTable;

/// Everything a run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider API key.
    pub api_key: String,
    /// Provider query endpoint.
    pub base_url: String,
    /// Table styling.
    pub color: ColorMode,
    /// Normalized symbols, in input order, duplicates kept.
    pub symbols: Vec<String>,
}

impl Config {
    /// Normalizes `raw_symbols` through `aliases` and builds the configuration.
    ///
    /// Returns `MqError::EmptySymbols` when no symbol is left, before anything
    /// touches the network.
    pub fn new(
        api_key: &str,
        base_url: &str,
        color: ColorMode,
        raw_symbols: &[String],
        aliases: &AliasTable,
    ) -> Result<Self> {
        let symbols: Vec<String> = raw_symbols
            .iter()
            .map(|raw| aliases.normalize(raw))
            .filter(|s| !s.is_empty())
            .collect();

        if symbols.is_empty() {
            return Err(MqError::EmptySymbols);
        }

        Ok(Config {
            api_key: String::from(api_key),
            base_url: String::from(base_url),
            color,
            symbols,
        })
    }

    /// Provider adapter for this configuration.
    pub fn provider(&self) -> AlphaVantage {
        AlphaVantage::new(&self.base_url, &self.api_key)
    }
}
