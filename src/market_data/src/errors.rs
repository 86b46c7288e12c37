use thiserror::Error;

use crate::providers::ProviderError;

/// The unified error type for the `market_data` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An error originating from a data provider (API failure, validation).
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// An error related to configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A cache entry could not be serialized.
    #[error("Cache serialization failed")]
    CacheFormat(#[from] serde_json::Error),

    /// A generic I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
