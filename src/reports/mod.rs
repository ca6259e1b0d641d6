// Reports module - derived metrics over simulation results

pub mod summary;

pub use summary::{summarize, DcaSummary};
