//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] trait, a unified interface for
//! fetching daily OHLC history from any market data vendor. Each concrete
//! implementation handles its own API logic and is responsible for the
//! normalization contract the engine relies on: bars ascending by date,
//! deduplicated, one series per requested symbol (empty when the vendor has
//! no rows — never zero-valued bars).
//!
//! The trait is async and object-safe, so callers can select a provider at
//! runtime behind `dyn DataProvider`.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use market_data::models::request::DailyBarsRequest;
//! use market_data::providers::{DataProvider, ProviderError};
//! use pivot_engine::models::bar::DailySeries;
//!
//! struct FixtureProvider;
//!
//! #[async_trait]
//! impl DataProvider for FixtureProvider {
//!     async fn fetch_daily_bars(
//!         &self,
//!         _request: DailyBarsRequest,
//!     ) -> Result<Vec<DailySeries>, ProviderError> {
//!         Ok(vec![])
//!     }
//! }
//! ```

pub mod alpaca_rest;

use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use pivot_engine::models::bar::DailySeries;

use crate::models::request::DailyBarsRequest;

/// Trait for fetching daily OHLC history from a market data provider.
#[async_trait]
pub trait DataProvider {
    /// Fetches daily bars for the given request.
    ///
    /// Returns one normalized [`DailySeries`] per requested symbol, in
    /// request order.
    async fn fetch_daily_bars(
        &self,
        request: DailyBarsRequest,
    ) -> Result<Vec<DailySeries>, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// A required environment variable is not set.
    #[snafu(display("Missing environment variable: {name}"))]
    MissingEnvVar { name: String, backtrace: Backtrace },

    /// The HTTP client could not be constructed.
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// An API key contains characters that cannot appear in a header.
    #[snafu(display("Invalid API key format: {source}"))]
    InvalidApiKey {
        source: reqwest::header::InvalidHeaderValue,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a [`DataProvider`] implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// An error during the API request itself (network failure, timeout,
    /// malformed response body).
    #[snafu(display("API request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The provider's API returned an error response.
    #[snafu(display("API error: {message}"))]
    Api {
        message: String,
        backtrace: Backtrace,
    },

    /// The request parameters were invalid for this provider.
    #[snafu(display("Invalid parameters for provider: {message}"))]
    Validation {
        message: String,
        backtrace: Backtrace,
    },
}
