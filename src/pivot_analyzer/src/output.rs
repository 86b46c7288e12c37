//! Terminal table and JSON rows for computed levels.
//!
//! The table mirrors the classical pivot sheet: level, price, signed %
//! distance from the latest close, above/below status. The JSON rows are
//! the seam external renderers consume; each row carries the bar plus the
//! levels in effect that day, already stepped (no interpolation left to do).

use chrono::NaiveDate;
use serde::Serialize;

use pivot_engine::align::AlignedPivotSeries;
use pivot_engine::models::bar::DailySeries;
use pivot_engine::models::granularity::Granularity;
use pivot_engine::models::levels::PivotLevels;
use pivot_engine::models::period::PeriodBar;

const TABLE_WIDTH: usize = 66;

pub fn print_levels_table(
    symbol: &str,
    granularity: Granularity,
    period: &PeriodBar,
    levels: &PivotLevels,
    last_close: f64,
) {
    let header = format!(
        "{} {} pivots (period ended {}) | last close: ${:.2}",
        symbol.to_uppercase(),
        granularity,
        period.period_end,
        last_close
    );
    println!("\n{header}");
    println!("{}", "=".repeat(header.len().max(TABLE_WIDTH)));
    println!(
        "{:<20} | {:>10} | {:>10} | {}",
        "Level", "Price", "% Distance", "Status"
    );
    println!("{}", "-".repeat(TABLE_WIDTH));

    for (name, value) in levels.named() {
        let pct = (value / last_close - 1.0) * 100.0;
        let status = if value > last_close {
            "ABOVE (resistance)"
        } else {
            "BELOW (support)"
        };
        println!(
            "{:<20} | {:>10.2} | {:>9}% | {}",
            label(name),
            value,
            format!("{:+.0}", pct),
            status
        );
    }
    println!("{}", "-".repeat(TABLE_WIDTH));
}

fn label(name: &str) -> &'static str {
    match name {
        "R3" => "Resistance 3 (R3)",
        "R2" => "Resistance 2 (R2)",
        "R1" => "Resistance 1 (R1)",
        "P" => "PIVOT POINT (P)",
        "S1" => "Support 1 (S1)",
        "S2" => "Support 2 (S2)",
        "S3" => "Support 3 (S3)",
        _ => "Level",
    }
}

/// One exported row: the daily bar plus the levels in effect on that date.
/// `levels` is absent for dates with no strictly-prior completed period.
#[derive(Debug, Serialize)]
pub struct SeriesRow {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<PivotLevels>,
}

pub fn series_rows(series: &DailySeries, aligned: &AlignedPivotSeries) -> Vec<SeriesRow> {
    series
        .bars
        .iter()
        .map(|bar| SeriesRow {
            date: bar.date,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            levels: aligned.get(bar.date).copied(),
        })
        .collect()
}
