//! Aggregate of the daily bars falling within one calendar period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// OHLC aggregate of a contiguous run of daily bars in one calendar period.
///
/// `open` is the first bar's open, `high`/`low` the period extremes and
/// `close` the last bar's close. Never mutated after partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodBar {
    /// The last trading day of the period, at or before the calendar
    /// boundary.
    pub period_end: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}
