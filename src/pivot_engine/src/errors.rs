use thiserror::Error;

use crate::models::granularity::Granularity;

/// The unified error type for the `pivot_engine` crate.
///
/// All three variants are detected at the crate boundary, before or during
/// partitioning; the computation itself is total over well-formed inputs
/// and never substitutes default values for missing levels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The supplied series contained no bars at all.
    #[error("no data returned for {symbol}")]
    NoData { symbol: String },

    /// Fewer than two periods could be partitioned, so no prior-period
    /// baseline exists to compute levels from.
    #[error("insufficient data: {periods} {granularity} period(s) in series, need at least 2")]
    InsufficientData {
        periods: usize,
        granularity: Granularity,
    },

    /// An unrecognized period granularity token.
    #[error("invalid granularity {token:?}, expected one of d, w, m, q, a")]
    InvalidGranularity { token: String },
}
