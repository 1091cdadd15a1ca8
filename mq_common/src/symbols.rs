//! Symbol sources and normalization.
//!
//! Symbols come from a comma-separated `-s` value and from a newline-delimited file.
//! Before fetching, each one is trimmed, uppercased and looked up in an `AliasTable`
//! that maps user shorthand (e.g. `BTC`) to the provider's symbol (`BTCUSD=X`).
//! Duplicates are kept; each produces its own quote.
use std::collections::HashMap;
use std::io::BufRead;

use crate::error::MqError;
use crate::result::Result;

/// Built-in alias entries.
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[("BTC", "BTCUSD=X")];

/// Trait providing file parsing for symbols.
pub trait SymbolParser {
    /// Parses symbols from a buffered reader.
    ///
    /// Each non-empty line, trimmed, is one raw symbol.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<String>>;
}

/// Raw symbol list as read from the user.
pub struct SymbolList;

impl SymbolParser for SymbolList {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<String>> {
        let mut symbols = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(MqError::Io)?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() {
                continue;
            }
            symbols.push(String::from(trimmed_line));
        }
        Ok(symbols)
    }
}

impl SymbolList {
    /// Splits a comma-separated flag value, dropping empty entries.
    pub fn split(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Mapping from shorthand tickers to provider symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    /// Table without any entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Table holding `DEFAULT_ALIASES`.
    pub fn with_defaults() -> Self {
        let mut table = Self::empty();
        for (from, to) in DEFAULT_ALIASES {
            table.insert(from, to);
        }
        table
    }

    /// Adds or replaces an alias. Both sides are uppercased.
    pub fn insert(&mut self, from: &str, to: &str) {
        self.entries
            .insert(from.trim().to_uppercase(), to.trim().to_uppercase());
    }

    /// Parses and adds a `FROM=TO` argument. Only the first `=` separates, so the
    /// target may itself contain `=`.
    pub fn insert_spec(&mut self, spec: &str) -> Result<()> {
        match spec.split_once('=') {
            Some((from, to)) if !from.trim().is_empty() && !to.trim().is_empty() => {
                self.insert(from, to);
                Ok(())
            }
            _ => Err(MqError::Alias(String::from(spec))),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Uppercases `raw` and applies the alias, if any.
    pub fn normalize(&self, raw: &str) -> String {
        let symbol = raw.trim().to_uppercase();
        match self.entries.get(&symbol) {
            Some(target) => target.clone(),
            None => symbol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_file_skips_blank_lines() {
        let input = Cursor::new("aapl\n\n  msft  \r\nibm\n   \n");
        let symbols = SymbolList::parse_from_file(input).unwrap();
        assert_eq!(symbols, vec!["aapl", "msft", "ibm"]);
    }

    #[test]
    fn parse_empty_file() {
        let symbols = SymbolList::parse_from_file(Cursor::new("")).unwrap();
        assert!(symbols.is_empty());
    }

    #[test]
    fn split_flag_value() {
        assert_eq!(SymbolList::split("ibm, aapl,,btc,"), vec!["ibm", "aapl", "btc"]);
        assert!(SymbolList::split(" , ").is_empty());
    }

    #[test]
    fn default_alias_maps_btc() {
        let table = AliasTable::with_defaults();
        assert_eq!(table.normalize("btc"), "BTCUSD=X");
        assert_eq!(table.normalize(" ibm "), "IBM");
    }

    #[test]
    fn empty_table_only_uppercases() {
        assert_eq!(AliasTable::empty().normalize("btc"), "BTC");
    }

    #[test]
    fn alias_spec_parsing() {
        let mut table = AliasTable::empty();
        table.insert_spec("eth=ethusd=x").unwrap();
        assert_eq!(table.normalize("ETH"), "ETHUSD=X");
        assert_eq!(table.len(), 1);

        for bad in ["eth", "=X", "eth=", ""] {
            assert!(matches!(table.insert_spec(bad), Err(MqError::Alias(_))));
        }
    }
}
