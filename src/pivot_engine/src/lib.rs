//! Period pivot computation over daily OHLC series.
//!
//! The pipeline is: partition a daily series into calendar periods,
//! derive the classical pivot levels from each completed period, and
//! align each level set onto every daily date of the *following* period
//! so the result can drive a step-function overlay on a daily chart.

pub mod align;
pub mod errors;
pub mod models;
pub mod partition;

use crate::align::AlignedPivotSeries;
use crate::errors::Error;
use crate::models::bar::DailySeries;
use crate::models::granularity::Granularity;
use crate::models::levels::PivotLevels;
use crate::models::period::PeriodBar;

/// Runs the full pipeline: partition `series` into calendar periods and
/// map every eligible daily date to the pivot levels in effect on it.
///
/// A date is eligible when a strictly-prior completed period exists; dates
/// at or before the first period's end receive no entry.
pub fn aligned_levels(
    series: &DailySeries,
    granularity: Granularity,
) -> Result<AlignedPivotSeries, Error> {
    let periods = partition::partition(series, granularity)?;
    Ok(align::align(series, &periods))
}

/// Returns the most recently *completed* period together with the levels it
/// projects onto the period currently forming.
///
/// The last partitioned period contains the newest bars and is treated as
/// still open, so the baseline is the second-to-last period.
pub fn previous_period_levels(
    series: &DailySeries,
    granularity: Granularity,
) -> Result<(PeriodBar, PivotLevels), Error> {
    let periods = partition::partition(series, granularity)?;
    let prev = periods[periods.len() - 2];
    Ok((prev, PivotLevels::from_period(&prev)))
}
