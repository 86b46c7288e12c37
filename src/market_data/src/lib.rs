//! Market-data acquisition for the pivot analyzer: provider abstraction,
//! the Alpaca REST daily-bars provider, a file-backed fetch cache and TOML
//! configuration.

pub mod cache;
pub mod config;
pub mod errors;
pub mod models;
pub mod providers;

use log::info;
use pivot_engine::models::bar::DailySeries;

use crate::cache::FetchCache;
use crate::errors::Error;
use crate::models::request::DailyBarsRequest;
use crate::providers::DataProvider;

/// Fetches daily bars through the cache when one is supplied, falling back
/// to the provider and storing the fresh result on the way out.
pub async fn fetch_daily_bars(
    provider: &dyn DataProvider,
    cache: Option<&FetchCache>,
    request: &DailyBarsRequest,
) -> Result<Vec<DailySeries>, Error> {
    if let Some(cache) = cache {
        if let Some(hit) = cache.lookup(request) {
            info!(
                "cache hit for {} {}..{}",
                request.symbols.join(","),
                request.start,
                request.end
            );
            return Ok(hit);
        }
    }

    info!(
        "fetching {} {}..{}",
        request.symbols.join(","),
        request.start,
        request.end
    );
    let series = provider.fetch_daily_bars(request.clone()).await?;
    if let Some(cache) = cache {
        cache.store(request, &series)?;
    }
    Ok(series)
}
