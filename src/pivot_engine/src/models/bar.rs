//! Canonical in-memory representation of a daily OHLC bar.
//!
//! This struct is the standard input for the pivot pipeline and the standard
//! output of every data provider implementation upstream, regardless of
//! vendor.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Absolute price tolerance used when checking bar coherence.
const PRICE_TOLERANCE: f64 = 1e-6;

/// One row of daily market data for a single trading day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// The calendar date of the trading day (timezone-naive).
    pub date: NaiveDate,

    /// Opening price.
    pub open: f64,

    /// Highest price of the day.
    pub high: f64,

    /// Lowest price of the day.
    pub low: f64,

    /// Closing price.
    pub close: f64,
}

impl DailyBar {
    /// Whether the prices satisfy `low <= open, close <= high` within
    /// floating-point tolerance. Rows failing this are dropped during
    /// provider-side normalization, never inside the engine.
    pub fn is_coherent(&self) -> bool {
        let lo = self.low - PRICE_TOLERANCE;
        let hi = self.high + PRICE_TOLERANCE;
        lo <= self.open && self.open <= hi && lo <= self.close && self.close <= hi
    }
}

/// Complete daily trading history for a single symbol.
///
/// Bars are unique and strictly ascending by date; that normalization is the
/// data provider's contract, so the engine only asserts it in debug builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    /// The symbol this history represents (e.g. "QQQ").
    pub symbol: String,
    /// The daily bars, ascending by date.
    pub bars: Vec<DailyBar>,
}

impl DailySeries {
    pub fn new(symbol: impl Into<String>, bars: Vec<DailyBar>) -> Self {
        Self {
            symbol: symbol.into(),
            bars,
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Closing price of the most recent bar.
    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|bar| bar.close)
    }

    /// A copy restricted to the inclusive date window `[from, to]`.
    pub fn clipped(&self, from: NaiveDate, to: NaiveDate) -> DailySeries {
        let bars = self
            .bars
            .iter()
            .copied()
            .filter(|bar| bar.date >= from && bar.date <= to)
            .collect();
        DailySeries::new(self.symbol.clone(), bars)
    }
}
