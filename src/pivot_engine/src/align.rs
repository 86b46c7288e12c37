//! Forward alignment of period pivot levels onto daily dates.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::bar::DailySeries;
use crate::models::levels::PivotLevels;
use crate::models::period::PeriodBar;

/// Date-keyed mapping from each daily date to the pivot levels in effect on
/// that date. Iteration order is ascending by date, so renderers can draw
/// the step function directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignedPivotSeries {
    levels: IndexMap<NaiveDate, PivotLevels>,
}

impl AlignedPivotSeries {
    /// The levels in effect on `date`, if a strictly-prior completed period
    /// exists for it.
    pub fn get(&self, date: NaiveDate) -> Option<&PivotLevels> {
        self.levels.get(&date)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &PivotLevels)> {
        self.levels.iter().map(|(date, levels)| (*date, levels))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The earliest date carrying levels.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.levels.keys().next().copied()
    }
}

/// Aligns each completed period's levels onto every daily date of the
/// *following* period, producing the step-function shape.
///
/// The levels derived from `periods[i]` apply to every date `d` with
/// `periods[i].period_end < d <= periods[i + 1].period_end`. Dates at or
/// before the first period's end have no strictly-prior completed period
/// and receive no entry, and the last period never projects levels onto
/// in-range dates, so provisional levels for a still-forming period cannot
/// leak into the output. Pure and deterministic: identical inputs always
/// produce an identical mapping.
///
/// Fewer than two periods yield an empty mapping; [`partition`] rejects
/// that case before this function is reached in the normal pipeline.
///
/// [`partition`]: crate::partition::partition
pub fn align(series: &DailySeries, periods: &[PeriodBar]) -> AlignedPivotSeries {
    if periods.len() < 2 || series.bars.is_empty() {
        return AlignedPivotSeries::default();
    }

    let level_sets: Vec<PivotLevels> = periods.iter().map(PivotLevels::from_period).collect();
    let last_end = periods[periods.len() - 1].period_end;

    let mut levels = IndexMap::new();
    let mut effective = 0;
    for bar in &series.bars {
        if bar.date <= periods[0].period_end {
            continue;
        }
        if bar.date > last_end {
            break;
        }
        while bar.date > periods[effective + 1].period_end {
            effective += 1;
        }
        levels.insert(bar.date, level_sets[effective]);
    }
    AlignedPivotSeries { levels }
}
