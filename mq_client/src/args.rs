//! Command-line arguments for `mq`.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use mq_common::provider::{BASE_URL, DEFAULT_API_KEY};
use mq_common::report::ColorMode;
use std::path::PathBuf;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "mq", version, about = "Print a quote table for a list of ticker symbols", long_about = None)]
pub struct Args {
    /// Comma-separated symbols, e.g. `ibm,aapl,btc`.
    #[clap(short = 's', long = "symbols")]
    pub symbols: Option<String>,

    /// Path to a file with one symbol per line.
    #[clap(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    /// Print diagnostics for failed lookups.
    #[clap(short = 'v', long)]
    pub verbose: bool,

    /// Provider API key.
    #[clap(short = 'k', long = "api-key", env = "MQ_API_KEY", default_value = DEFAULT_API_KEY, hide_env_values = true)]
    pub api_key: String,

    /// Extra symbol alias as FROM=TO (repeatable), e.g. `eth=ETHUSD=X`.
    #[clap(short = 'a', long = "alias")]
    pub aliases: Vec<String>,

    /// Do not apply the built-in aliases (BTC=BTCUSD=X).
    #[clap(long)]
    pub no_default_aliases: bool,

    /// Provider query endpoint.
    #[clap(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Color the change column.
    #[clap(long, value_enum, default_value_t = ColorMode::Always)]
    pub color: ColorMode,
}
