//! Calendar bucket sizes for period aggregation.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// The calendar bucket size used to aggregate daily bars before computing
/// pivot levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// Each trading day is its own period.
    Daily,
    /// ISO weeks; a period ends on its last trading day.
    Weekly,
    /// Calendar months; a period ends on the last trading day at or before
    /// the month boundary.
    Monthly,
    /// Calendar quarters (Jan-Mar, Apr-Jun, Jul-Sep, Oct-Dec).
    Quarterly,
    /// Calendar years.
    Annual,
}

/// Bucket identity for one calendar period. Two dates belong to the same
/// period exactly when their keys are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PeriodKey {
    year: i32,
    index: u32,
}

impl Granularity {
    /// The bucket key for a calendar date at this granularity.
    pub(crate) fn bucket(&self, date: NaiveDate) -> PeriodKey {
        match self {
            Granularity::Daily => PeriodKey {
                year: date.year(),
                index: date.ordinal(),
            },
            Granularity::Weekly => {
                let week = date.iso_week();
                PeriodKey {
                    year: week.year(),
                    index: week.week(),
                }
            }
            Granularity::Monthly => PeriodKey {
                year: date.year(),
                index: date.month(),
            },
            Granularity::Quarterly => PeriodKey {
                year: date.year(),
                index: (date.month() - 1) / 3 + 1,
            },
            Granularity::Annual => PeriodKey {
                year: date.year(),
                index: 0,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
            Granularity::Quarterly => "quarterly",
            Granularity::Annual => "annual",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = Error;

    /// Accepts the single-letter tokens used on the command line as well as
    /// the spelled-out names.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_lowercase().as_str() {
            "d" | "day" | "daily" => Ok(Granularity::Daily),
            "w" | "wk" | "week" | "weekly" => Ok(Granularity::Weekly),
            "m" | "mo" | "month" | "monthly" => Ok(Granularity::Monthly),
            "q" | "qtr" | "quarter" | "quarterly" => Ok(Granularity::Quarterly),
            "a" | "y" | "year" | "annual" | "annually" | "yearly" => Ok(Granularity::Annual),
            _ => Err(Error::InvalidGranularity {
                token: token.to_string(),
            }),
        }
    }
}
