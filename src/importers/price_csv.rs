//! CSV price series loader
//!
//! Reads a headered CSV of dates and closing prices and delivers the cleaned,
//! chronologically sorted series the simulation core expects. Rows that
//! cannot be parsed are skipped with a warning; column positions are detected
//! from the header row so exports with extra columns (volume, open/high/low)
//! load unchanged.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::series::PricePoint;

/// Parse a CSV file into a sorted price series
pub fn parse_price_csv<P: AsRef<Path>>(file_path: P) -> Result<Vec<PricePoint>> {
    let path = file_path.as_ref();
    info!("Parsing price CSV file: {:?}", path);

    let mut reader = ReaderBuilder::new()
        .flexible(true) // Allow variable number of columns
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file {:?}", path))?;

    let headers = reader
        .headers()
        .context("Failed to read CSV headers")?
        .clone();

    debug!("CSV headers: {:?}", headers);

    let columns = find_columns(&headers)?;
    debug!("Column mapping: {:?}", columns);

    let mut points = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result.context("Failed to read CSV record")?;

        match parse_csv_row(&record, &columns) {
            Ok(Some(point)) => points.push(point),
            Ok(None) => continue,
            Err(e) => {
                warn!("Skipping row {}: {}", idx + 2, e);
                continue;
            }
        }
    }

    // Establish the chronological ordering the accumulator relies on
    points.sort_by_key(|p| p.date);

    info!("Successfully parsed {} price points from CSV", points.len());
    Ok(points)
}

#[derive(Debug)]
struct CsvColumnMapping {
    date: usize,
    price: usize,
}

fn find_columns(headers: &csv::StringRecord) -> Result<CsvColumnMapping> {
    let mut date_idx = None;
    let mut price_idx = None;

    for (idx, header) in headers.iter().enumerate() {
        let text = header.trim().to_lowercase();

        if text == "date" || text.starts_with("date") {
            date_idx.get_or_insert(idx);
        }

        // "close" wins over a generic "price" column when both exist
        if text.contains("close") {
            price_idx = Some(idx);
        } else if text.contains("price") && price_idx.is_none() {
            price_idx = Some(idx);
        }
    }

    match (date_idx, price_idx) {
        (Some(date), Some(price)) => Ok(CsvColumnMapping { date, price }),
        _ => Err(anyhow!(
            "CSV is missing required columns (need a date column and a close/price column), found: {:?}",
            headers
        )),
    }
}

fn parse_csv_row(
    record: &csv::StringRecord,
    columns: &CsvColumnMapping,
) -> Result<Option<PricePoint>> {
    let date_str = record.get(columns.date).unwrap_or("").trim();
    let price_str = record.get(columns.price).unwrap_or("").trim();

    // Blank padding rows at the end of exports
    if date_str.is_empty() && price_str.is_empty() {
        return Ok(None);
    }

    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", date_str))?;

    let price = Decimal::from_str(price_str)
        .with_context(|| format!("invalid price '{}'", price_str))?;

    Ok(Some(PricePoint::new(date, price)))
}
