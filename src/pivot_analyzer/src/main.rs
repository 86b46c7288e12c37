//! CLI invocation surface for the pivot analyzer.
//!
//! Collects ticker, date range and granularity, drives the data feed and
//! the pivot engine, and renders either a levels table or a JSON export of
//! the forward-aligned series.

mod cli;
mod output;

use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use chrono::NaiveDate;
use clap::Parser;
use log::{error, info};

use market_data::cache::FetchCache;
use market_data::config::FeedConfig;
use market_data::models::request::DailyBarsRequest;
use market_data::providers::DataProvider;
use market_data::providers::alpaca_rest::AlpacaProvider;
use pivot_engine::models::bar::DailySeries;
use pivot_engine::models::granularity::Granularity;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => FeedConfig::from_file(path)?,
        None => FeedConfig::default(),
    };

    let cache = build_cache(&config, cli.no_cache);
    let provider = match config.alpaca.base_url.as_deref() {
        Some(base_url) => AlpacaProvider::with_base_url(base_url)?,
        None => AlpacaProvider::new()?,
    };

    match cli.command {
        Commands::Levels {
            symbol,
            granularity,
            lookback_days,
        } => run_levels(&provider, cache.as_ref(), &symbol, granularity, lookback_days).await,
        Commands::Series {
            symbol,
            year,
            granularity,
            output,
        } => {
            run_series(
                &provider,
                cache.as_ref(),
                &symbol,
                year,
                granularity,
                output.as_deref(),
            )
            .await
        }
    }
}

fn build_cache(config: &FeedConfig, no_cache: bool) -> Option<FetchCache> {
    if no_cache || !config.cache.enabled {
        return None;
    }
    let dir = config
        .cache
        .dir
        .clone()
        .unwrap_or_else(FetchCache::default_dir);
    let ttl = Duration::from_secs(
        config
            .cache
            .ttl_secs
            .unwrap_or(FetchCache::DEFAULT_TTL_SECS),
    );
    Some(FetchCache::new(dir, ttl))
}

async fn run_levels(
    provider: &dyn DataProvider,
    cache: Option<&FetchCache>,
    symbol: &str,
    granularity: Granularity,
    lookback_days: i64,
) -> Result<(), Box<dyn Error>> {
    let end = chrono::Utc::now().date_naive();
    let start = end - chrono::Duration::days(lookback_days);
    let request = DailyBarsRequest::single(symbol, start, end);

    let series = fetch_symbol(provider, cache, &request, symbol).await?;
    let (period, levels) = pivot_engine::previous_period_levels(&series, granularity)?;
    let last_close = series.last_close().ok_or("series unexpectedly empty")?;

    output::print_levels_table(symbol, granularity, &period, &levels, last_close);
    Ok(())
}

async fn run_series(
    provider: &dyn DataProvider,
    cache: Option<&FetchCache>,
    symbol: &str,
    year: i32,
    granularity: Granularity,
    output_path: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let start = NaiveDate::from_ymd_opt(year - 1, 1, 1).ok_or("year out of range")?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or("year out of range")?;
    let request = DailyBarsRequest::single(symbol, start, end);

    let series = fetch_symbol(provider, cache, &request, symbol).await?;
    // The preceding year is lookback context; the export covers the target
    // year only, with levels already stepped per date.
    let aligned = pivot_engine::aligned_levels(&series, granularity)?;
    let year_start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or("year out of range")?;
    let rows = output::series_rows(&series.clipped(year_start, end), &aligned);
    let json = serde_json::to_string_pretty(&rows)?;

    match output_path {
        Some(path) => {
            fs::write(path, json)?;
            info!("wrote {} rows to {}", rows.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Extracts the requested symbol's series, tolerating providers that key
/// the response by a normalized spelling. A symbol absent from the response
/// is an empty series; the engine turns that into its no-data error.
async fn fetch_symbol(
    provider: &dyn DataProvider,
    cache: Option<&FetchCache>,
    request: &DailyBarsRequest,
    symbol: &str,
) -> Result<DailySeries, Box<dyn Error>> {
    let all = market_data::fetch_daily_bars(provider, cache, request).await?;
    Ok(all
        .into_iter()
        .find(|series| series.symbol.eq_ignore_ascii_case(symbol))
        .unwrap_or_else(|| DailySeries::new(symbol, Vec::new())))
}
