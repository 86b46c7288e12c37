//! The classical pivot-point level set derived from one completed period.

use serde::{Deserialize, Serialize};

use crate::models::period::PeriodBar;

/// Seven pivot levels computed from a prior period's high, low and close.
///
/// Computed once per completed period and attributed to the period that
/// *follows* it: the set is a forecast anchor for the next period, not a
/// descriptive statistic of the one it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotLevels {
    pub pivot: f64,
    pub r1: f64,
    pub s1: f64,
    pub r2: f64,
    pub s2: f64,
    pub r3: f64,
    pub s3: f64,
}

impl PivotLevels {
    /// Applies the standard formulas to a completed period's range.
    ///
    /// Total for finite positive inputs; a degenerate period with
    /// `high == low` yields flat but valid levels.
    pub fn from_period(period: &PeriodBar) -> Self {
        let PeriodBar {
            high, low, close, ..
        } = *period;
        let pivot = (high + low + close) / 3.0;
        let r1 = 2.0 * pivot - low;
        let s1 = 2.0 * pivot - high;
        Self {
            pivot,
            r1,
            s1,
            r2: pivot + (r1 - s1),
            s2: pivot - (r1 - s1),
            r3: high + 2.0 * (pivot - low),
            s3: low - 2.0 * (high - pivot),
        }
    }

    /// The levels ordered top-down, paired with their conventional names.
    pub fn named(&self) -> [(&'static str, f64); 7] {
        [
            ("R3", self.r3),
            ("R2", self.r2),
            ("R1", self.r1),
            ("P", self.pivot),
            ("S1", self.s1),
            ("S2", self.s2),
            ("S3", self.s3),
        ]
    }
}
