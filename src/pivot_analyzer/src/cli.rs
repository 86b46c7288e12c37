use std::path::PathBuf;

use clap::{Parser, Subcommand};

use pivot_engine::models::granularity::Granularity;

/// Compute classical pivot support/resistance levels for a stock ticker.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to an optional TOML config file (endpoint override, cache
    /// directory and TTL)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Bypass the fetch cache entirely
    #[arg(long, global = true)]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the previous completed period's pivot levels as a table
    Levels {
        /// Ticker symbol (e.g. "QQQ")
        #[arg(long)]
        symbol: String,

        /// Pivot period: d(aily), w(eekly), m(onthly), q(uarterly), a(nnual)
        #[arg(long, default_value = "a", value_parser = parse_granularity)]
        granularity: Granularity,

        /// Calendar days of history to fetch as lookback context
        #[arg(long, default_value_t = 730)]
        lookback_days: i64,
    },

    /// Export a year of daily bars with forward-aligned pivot levels as JSON
    Series {
        /// Ticker symbol (e.g. "TSLA")
        #[arg(long)]
        symbol: String,

        /// Target year; the preceding year is fetched as lookback context
        #[arg(long)]
        year: i32,

        /// Pivot period: d(aily), w(eekly), m(onthly), q(uarterly), a(nnual)
        #[arg(long, default_value = "a", value_parser = parse_granularity)]
        granularity: Granularity,

        /// Write the JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Validates the granularity token before any fetch or computation begins.
fn parse_granularity(token: &str) -> Result<Granularity, String> {
    token
        .parse::<Granularity>()
        .map_err(|err| err.to_string())
}
