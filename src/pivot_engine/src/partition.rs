//! Partitioning of a daily series into non-overlapping calendar periods.

use crate::errors::Error;
use crate::models::bar::DailySeries;
use crate::models::granularity::Granularity;
use crate::models::period::PeriodBar;

/// Partitions `series` into calendar periods at the given granularity.
///
/// Bars are bucketed by [`Granularity::bucket`]; each bucket with at least
/// one bar produces one [`PeriodBar`] whose `period_end` is its last trading
/// day, so month/quarter/year ends land on the last *available* trading day
/// at or before the calendar boundary. A bucket holding a single bar is a
/// valid period, not an error.
///
/// # Errors
///
/// * [`Error::NoData`] when the series is empty.
/// * [`Error::InsufficientData`] when fewer than two periods result, since
///   no prior-period baseline would exist to compute levels from.
pub fn partition(series: &DailySeries, granularity: Granularity) -> Result<Vec<PeriodBar>, Error> {
    if series.bars.is_empty() {
        return Err(Error::NoData {
            symbol: series.symbol.clone(),
        });
    }
    debug_assert!(
        series.bars.windows(2).all(|pair| pair[0].date < pair[1].date),
        "series dates must be unique and ascending"
    );

    let mut periods: Vec<PeriodBar> = Vec::new();
    let mut current: Option<(crate::models::granularity::PeriodKey, PeriodBar)> = None;

    for bar in &series.bars {
        let key = granularity.bucket(bar.date);
        match &mut current {
            Some((open_key, aggregate)) if *open_key == key => {
                aggregate.high = aggregate.high.max(bar.high);
                aggregate.low = aggregate.low.min(bar.low);
                aggregate.close = bar.close;
                aggregate.period_end = bar.date;
            }
            _ => {
                if let Some((_, finished)) = current.take() {
                    periods.push(finished);
                }
                current = Some((
                    key,
                    PeriodBar {
                        period_end: bar.date,
                        open: bar.open,
                        high: bar.high,
                        low: bar.low,
                        close: bar.close,
                    },
                ));
            }
        }
    }
    if let Some((_, finished)) = current {
        periods.push(finished);
    }

    if periods.len() < 2 {
        return Err(Error::InsufficientData {
            periods: periods.len(),
            granularity,
        });
    }
    Ok(periods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bar::DailyBar;
    use chrono::{Datelike, NaiveDate};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bar(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> DailyBar {
        DailyBar {
            date,
            open,
            high,
            low,
            close,
        }
    }

    #[test]
    fn empty_series_is_no_data() {
        let series = DailySeries::new("QQQ", vec![]);
        match partition(&series, Granularity::Monthly) {
            Err(Error::NoData { symbol }) => assert_eq!(symbol, "QQQ"),
            other => panic!("expected NoData, got {:?}", other),
        }
    }

    #[test]
    fn single_period_is_insufficient() {
        let series = DailySeries::new(
            "QQQ",
            vec![
                bar(day(2024, 1, 2), 10.0, 12.0, 9.0, 11.0),
                bar(day(2024, 1, 3), 11.0, 13.0, 10.0, 12.0),
            ],
        );
        match partition(&series, Granularity::Monthly) {
            Err(Error::InsufficientData {
                periods,
                granularity,
            }) => {
                assert_eq!(periods, 1);
                assert_eq!(granularity, Granularity::Monthly);
            }
            other => panic!("expected InsufficientData, got {:?}", other),
        }
    }

    #[test]
    fn monthly_aggregation_uses_first_open_extremes_and_last_close() {
        let series = DailySeries::new(
            "QQQ",
            vec![
                bar(day(2024, 1, 30), 100.0, 104.0, 99.0, 103.0),
                bar(day(2024, 1, 31), 103.0, 110.0, 95.0, 101.0),
                bar(day(2024, 2, 1), 101.0, 102.0, 98.0, 100.0),
                bar(day(2024, 2, 28), 100.0, 107.0, 97.0, 106.0),
            ],
        );
        let periods = partition(&series, Granularity::Monthly).unwrap();
        assert_eq!(periods.len(), 2);

        let january = periods[0];
        assert_eq!(january.period_end, day(2024, 1, 31));
        assert_eq!(january.open, 100.0);
        assert_eq!(january.high, 110.0);
        assert_eq!(january.low, 95.0);
        assert_eq!(january.close, 101.0);

        let february = periods[1];
        assert_eq!(february.period_end, day(2024, 2, 28));
        assert_eq!(february.open, 101.0);
        assert_eq!(february.close, 106.0);
    }

    #[test]
    fn weekly_periods_end_on_last_trading_day_of_iso_week() {
        let series = DailySeries::new(
            "SPY",
            vec![
                bar(day(2024, 1, 1), 1.0, 1.0, 1.0, 1.0),
                bar(day(2024, 1, 3), 2.0, 2.0, 2.0, 2.0),
                bar(day(2024, 1, 5), 3.0, 3.0, 3.0, 3.0),
                bar(day(2024, 1, 8), 4.0, 4.0, 4.0, 4.0),
                bar(day(2024, 1, 9), 5.0, 5.0, 5.0, 5.0),
            ],
        );
        let periods = partition(&series, Granularity::Weekly).unwrap();
        assert_eq!(periods.len(), 2);
        assert_eq!(periods[0].period_end, day(2024, 1, 5));
        assert_eq!(periods[1].period_end, day(2024, 1, 9));
    }

    #[test]
    fn daily_granularity_makes_each_bar_a_period() {
        let series = DailySeries::new(
            "SPY",
            vec![
                bar(day(2024, 1, 2), 1.0, 2.0, 0.5, 1.5),
                bar(day(2024, 1, 3), 1.5, 2.5, 1.0, 2.0),
                bar(day(2024, 1, 4), 2.0, 3.0, 1.5, 2.5),
            ],
        );
        let periods = partition(&series, Granularity::Daily).unwrap();
        assert_eq!(periods.len(), 3);
        for (period, source) in periods.iter().zip(&series.bars) {
            assert_eq!(period.period_end, source.date);
            assert_eq!(period.open, source.open);
            assert_eq!(period.high, source.high);
            assert_eq!(period.low, source.low);
            assert_eq!(period.close, source.close);
        }
    }

    #[test]
    fn single_bar_period_collapses_to_that_bar() {
        // A quarter represented by one isolated trading day.
        let series = DailySeries::new(
            "SPY",
            vec![
                bar(day(2024, 3, 28), 10.0, 12.0, 9.0, 11.0),
                bar(day(2024, 4, 1), 11.0, 11.0, 11.0, 11.0),
            ],
        );
        let periods = partition(&series, Granularity::Quarterly).unwrap();
        assert_eq!(periods.len(), 2);
        let q2 = periods[1];
        assert_eq!(q2.open, 11.0);
        assert_eq!(q2.high, 11.0);
        assert_eq!(q2.low, 11.0);
        assert_eq!(q2.close, 11.0);
    }

    #[test]
    fn period_ends_are_strictly_increasing() {
        let bars: Vec<DailyBar> = (0i64..120)
            .filter_map(|offset| {
                let date = day(2024, 1, 1) + chrono::Duration::days(offset);
                (date.weekday().num_days_from_monday() < 5)
                    .then(|| bar(date, 100.0, 101.0, 99.0, 100.5))
            })
            .collect();
        let series = DailySeries::new("SPY", bars);
        for granularity in [
            Granularity::Daily,
            Granularity::Weekly,
            Granularity::Monthly,
            Granularity::Quarterly,
        ] {
            let periods = partition(&series, granularity).unwrap();
            assert!(
                periods
                    .windows(2)
                    .all(|pair| pair[0].period_end < pair[1].period_end),
                "{granularity} period ends must be strictly increasing"
            );
        }
    }
}
