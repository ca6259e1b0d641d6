// Simulation module - the DCA accumulation core

pub mod accumulator;

pub use accumulator::{accumulate, DcaResult, LedgerEntry};
