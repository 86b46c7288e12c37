use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use pivot_engine::models::bar::DailyBar;
use serde::Deserialize;

/// One bar row as returned by the Alpaca bars endpoint. Fields the pivot
/// pipeline has no use for (volume, trade count, vwap) are not modeled and
/// are ignored during deserialization.
#[derive(Deserialize, Debug)]
pub struct AlpacaBar {
    #[serde(rename = "t")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "o")]
    pub open: f64,
    #[serde(rename = "h")]
    pub high: f64,
    #[serde(rename = "l")]
    pub low: f64,
    #[serde(rename = "c")]
    pub close: f64,
}

impl AlpacaBar {
    /// Collapses the UTC bar timestamp to the trading date.
    pub fn into_daily_bar(self) -> DailyBar {
        DailyBar {
            date: self.timestamp.date_naive(),
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct AlpacaResponse {
    /// Symbol to bar rows for this page. Absent when the range holds no
    /// data for any requested symbol.
    #[serde(default)]
    pub bars: IndexMap<String, Vec<AlpacaBar>>,
    pub next_page_token: Option<String>,
}
