//! Contribution frequency resampling
//!
//! Daily series can be downsampled to weekly or monthly intervals before the
//! simulation runs. Each bucket is labeled with the calendar end of its
//! period (Sunday for weeks, last day of the month) and carries the mean of
//! the observed prices, so a contribution at that interval buys at the
//! average price of the period.

use anyhow::{anyhow, Result};
use chrono::{Datelike, Days, NaiveDate};
use itertools::Itertools;
use rust_decimal::Decimal;

use super::PricePoint;

/// How often a contribution is made, i.e. the sampling interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        }
    }
}

/// Parse a frequency string (daily, weekly, monthly)
pub fn parse_frequency(s: &str) -> Result<Frequency> {
    match s.to_lowercase().as_str() {
        "daily" | "d" => Ok(Frequency::Daily),
        "weekly" | "w" => Ok(Frequency::Weekly),
        "monthly" | "m" => Ok(Frequency::Monthly),
        _ => Err(anyhow!(
            "Invalid frequency '{}'. Use: daily, weekly, or monthly",
            s
        )),
    }
}

/// Sunday that closes the ISO week containing `date`.
fn week_end(date: NaiveDate) -> NaiveDate {
    let days_to_sunday = 6 - date.weekday().num_days_from_monday() as u64;
    date.checked_add_days(Days::new(days_to_sunday)).unwrap_or(date)
}

/// Last calendar day of the month containing `date`.
fn month_end(date: NaiveDate) -> NaiveDate {
    let next_month_start = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    next_month_start
        .and_then(|d| d.pred_opt())
        .unwrap_or(date)
}

/// Downsample a chronologically sorted series to the given frequency.
///
/// Consecutive points falling into the same period collapse into one point
/// whose price is the arithmetic mean of the bucket. Daily is the identity.
/// A sorted input yields a sorted output since the buckets are contiguous.
pub fn resample(points: &[PricePoint], frequency: Frequency) -> Vec<PricePoint> {
    if frequency == Frequency::Daily {
        return points.to_vec();
    }

    let bucket_label = |date: NaiveDate| match frequency {
        Frequency::Weekly => week_end(date),
        Frequency::Monthly => month_end(date),
        Frequency::Daily => date,
    };

    let buckets = points.iter().chunk_by(|p| bucket_label(p.date));

    let mut resampled = Vec::new();
    for (label, bucket) in &buckets {
        let mut sum = Decimal::ZERO;
        let mut count = 0u32;
        for p in bucket {
            sum += p.price;
            count += 1;
        }
        resampled.push(PricePoint::new(label, sum / Decimal::from(count)));
    }
    resampled
}
