//! Error handling for the DCA calculator
//!
//! Defines the typed failures the simulation core can signal and establishes
//! a unified Result type using anyhow for context chaining at the CLI and
//! importer boundaries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Typed failures from the simulation core.
///
/// These stay distinguishable from upstream I/O failures (file access, CSV
/// parsing), which are reported through anyhow context chains instead.
#[derive(Error, Debug)]
pub enum DcaError {
    /// A contribution parameter was negative.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A price at or below zero was encountered during the accumulation pass.
    /// The pass stops at that interval; no partial ledger is returned.
    #[error("non-positive price {price} at interval {index} ({date})")]
    NonPositivePrice {
        index: usize,
        date: NaiveDate,
        price: Decimal,
    },
}

/// Result type alias for fallible operations outside the core.
pub type Result<T> = anyhow::Result<T>;
