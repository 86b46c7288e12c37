#![cfg(test)]
//! End-to-end run of the pipeline over a two-year synthetic history:
//! the first year is consumed purely as lookback context and its derived
//! levels must hold, constant, across every trading day of the second year.

use chrono::{Datelike, Duration, NaiveDate};
use pivot_engine::aligned_levels;
use pivot_engine::models::bar::{DailyBar, DailySeries};
use pivot_engine::models::granularity::Granularity;

const EPS: f64 = 1e-9;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Weekday bars for 2023 and 2024. 2023 trades flat at 100 except for a
/// spike high of 120 in June, a washout low of 80 in October, and a final
/// close of 110 on Friday 2023-12-29. 2024 trades flat at 100.
fn two_year_history() -> DailySeries {
    let mut bars = Vec::new();
    let mut date = day(2023, 1, 2);
    while date <= day(2024, 12, 31) {
        if date.weekday().num_days_from_monday() < 5 {
            let (mut open, mut high, mut low, mut close) = (100.0, 100.0, 100.0, 100.0);
            if date == day(2023, 6, 15) {
                high = 120.0;
            }
            if date == day(2023, 10, 12) {
                low = 80.0;
            }
            if date == day(2023, 12, 29) {
                open = 105.0;
                high = 110.0;
                close = 110.0;
            }
            bars.push(DailyBar {
                date,
                open,
                high,
                low,
                close,
            });
        }
        date += Duration::days(1);
    }
    DailySeries::new("QQQ", bars)
}

#[test]
fn annual_levels_hold_constant_across_the_following_year() {
    let series = two_year_history();
    let aligned = aligned_levels(&series, Granularity::Annual).unwrap();

    // pivot = (120 + 80 + 110) / 3, r1 = 2p - low, s1 = 2p - high
    let pivot = 310.0 / 3.0;
    let r1 = 2.0 * pivot - 80.0;
    let s1 = 2.0 * pivot - 120.0;

    let trading_days_2024 = series
        .bars
        .iter()
        .filter(|bar| bar.date.year() == 2024)
        .count();
    assert_eq!(aligned.len(), trading_days_2024);

    for (date, levels) in aligned.iter() {
        assert_eq!(date.year(), 2024, "2023 dates must carry no levels");
        assert!((levels.pivot - pivot).abs() < EPS, "pivot drifted at {date}");
        assert!((levels.r1 - r1).abs() < EPS, "r1 drifted at {date}");
        assert!((levels.s1 - s1).abs() < EPS, "s1 drifted at {date}");
    }

    assert!((pivot - 103.333_333_333).abs() < 1e-6);
    assert!((r1 - 126.666_666_666).abs() < 1e-6);
    assert!((s1 - 86.666_666_666).abs() < 1e-6);
}

#[test]
fn first_aligned_date_is_the_first_trading_day_after_the_lookback_year() {
    let series = two_year_history();
    let aligned = aligned_levels(&series, Granularity::Annual).unwrap();
    // 2023 ends on Friday 2023-12-29; 2024 trading starts Monday 2024-01-01
    // in this synthetic weekday calendar.
    assert_eq!(aligned.first_date(), Some(day(2024, 1, 1)));
}

#[test]
fn single_year_history_is_rejected() {
    let series = two_year_history().clipped(day(2023, 1, 1), day(2023, 12, 31));
    let err = aligned_levels(&series, Granularity::Annual).unwrap_err();
    assert!(matches!(
        err,
        pivot_engine::errors::Error::InsufficientData { periods: 1, .. }
    ));
}
