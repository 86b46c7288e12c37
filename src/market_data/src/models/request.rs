use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::providers::alpaca_rest::params::AlpacaBarsParams;

/// Universal parameters for requesting daily OHLC history from any market
/// data provider.
///
/// The struct is vendor-agnostic: the core only ever consumes daily bars,
/// so the bar interval is implied and the range is expressed in calendar
/// dates rather than timestamps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyBarsRequest {
    /// Symbols to request (e.g. `["QQQ"]`, `["AAPL", "MSFT"]`).
    pub symbols: Vec<String>,

    /// First calendar date of the range (inclusive).
    pub start: NaiveDate,

    /// Last calendar date of the range (inclusive).
    pub end: NaiveDate,

    /// Optional, provider-specific parameters.
    #[serde(default)]
    pub provider_specific: ProviderParams,
}

impl DailyBarsRequest {
    /// A request with default provider behavior for a single symbol.
    pub fn single(symbol: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            symbols: vec![symbol.into()],
            start,
            end,
            provider_specific: ProviderParams::None,
        }
    }
}

/// Provider-specific request parameters, kept out of the universal struct so
/// adding a vendor never touches callers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum ProviderParams {
    #[default]
    None,
    Alpaca(AlpacaBarsParams),
}
