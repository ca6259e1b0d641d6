//! Price series types and helpers
//!
//! A price series is an ordered sequence of closing prices, one per interval.
//! Loaders (see `importers`) are responsible for delivering the series in
//! chronological ascending order; the simulation core relies on that order
//! without re-sorting.

pub mod resample;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

pub use resample::{parse_frequency, resample, Frequency};

/// One sampled interval of the price series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: Decimal,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: Decimal) -> Self {
        Self { date, price }
    }
}

/// Keep only the points with `from <= date <= to`.
///
/// Either bound may be omitted. Order is preserved, so a sorted input stays
/// sorted.
pub fn filter_range(
    points: &[PricePoint],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<PricePoint> {
    points
        .iter()
        .filter(|p| from.map_or(true, |f| p.date >= f) && to.map_or(true, |t| p.date <= t))
        .cloned()
        .collect()
}
