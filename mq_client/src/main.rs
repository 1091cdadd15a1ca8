//! mq — prints a sorted, colored quote table for a list of ticker symbols.
//!
//! Symbols are read from a file (`-f`, one per line) and from a comma-separated
//! list (`-s`); file symbols come first. Every symbol is fetched concurrently from
//! Alpha Vantage, and the table is printed once all lookups have finished. Lookups
//! that fail show `0.00` / `+0.00%`; run with `-v` to see why.
//!
//! Usage example (CLI):
//! ```bash
//! mq -s ibm,aapl,btc -k "$MQ_API_KEY"
//! mq -f ./watchlist.txt -v
//! ```
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::{CommandFactory, Parser};
use log::{debug, error};
use mq_common::symbols::{AliasTable, SymbolList, SymbolParser};
use mq_common::{Config, HttpTransport, MqError, QuoteTransport, Result};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::sync::Arc;

fn main() -> Result<(), MqError> {
    let args = Args::parse();
    init_logger(args.verbose);

    let transport = Arc::new(HttpTransport::new()?);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if execute(&args, transport, &mut out)? == Outcome::Usage {
        print_usage();
    }
    Ok(())
}

/// Whether a run printed the table or stopped at the usage text.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Rendered,
    Usage,
}

/// Resolves the symbols and runs the pipeline, or asks for usage when there is
/// nothing to fetch. Nothing is sent through `transport` in the usage case.
fn execute<W: Write>(args: &Args, transport: Arc<dyn QuoteTransport>, out: &mut W) -> Result<Outcome> {
    let raw_symbols = match collect_symbols(args) {
        Ok(symbols) => symbols,
        Err(e) => {
            error!("Cannot read symbols: {}", e);
            return Ok(Outcome::Usage);
        }
    };

    let mut aliases = if args.no_default_aliases {
        AliasTable::empty()
    } else {
        AliasTable::with_defaults()
    };
    for spec in &args.aliases {
        aliases.insert_spec(spec)?;
    }
    debug!("{} alias entries", aliases.len());

    let config = match Config::new(
        &args.api_key,
        &args.base_url,
        args.color,
        &raw_symbols,
        &aliases,
    ) {
        Ok(config) => config,
        Err(MqError::EmptySymbols) => return Ok(Outcome::Usage),
        Err(e) => return Err(e),
    };
    debug!("Symbols: {:?}", config.symbols);

    mq_common::run(&config, transport, out)?;
    Ok(Outcome::Rendered)
}

/// File symbols first, then the `-s` list.
fn collect_symbols(args: &Args) -> Result<Vec<String>> {
    let mut symbols = Vec::new();
    if let Some(path) = &args.file {
        let file = File::open(path)?;
        symbols.extend(SymbolList::parse_from_file(BufReader::new(file))?);
    }
    if let Some(value) = &args.symbols {
        symbols.extend(SymbolList::split(value));
    }
    Ok(symbols)
}

fn print_usage() {
    let mut command = Args::command();
    eprintln!("mq: {}", command.render_help());
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
