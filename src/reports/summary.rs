//! Summary metrics derived from a simulation result

use rust_decimal::Decimal;
use serde::Serialize;

use crate::simulation::DcaResult;

/// Headline figures for one simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct DcaSummary {
    pub intervals: usize,
    pub total_invested: Decimal,
    pub total_shares: Decimal,
    /// Portfolio value at the last interval (zero for an empty ledger).
    pub final_value: Decimal,
    pub net_gain_loss: Decimal,
    /// Gain/loss as a percentage of invested capital. None when nothing was
    /// invested, since the ratio is undefined.
    pub net_gain_loss_pct: Option<Decimal>,
}

/// Compute the derived metrics for a simulation result.
pub fn summarize(result: &DcaResult) -> DcaSummary {
    let final_value = result
        .ledger
        .last()
        .map(|entry| entry.portfolio_value)
        .unwrap_or(Decimal::ZERO);

    let net_gain_loss = final_value - result.total_invested;
    let net_gain_loss_pct = if result.total_invested > Decimal::ZERO {
        Some(net_gain_loss / result.total_invested * Decimal::from(100))
    } else {
        None
    };

    DcaSummary {
        intervals: result.ledger.len(),
        total_invested: result.total_invested,
        total_shares: result.total_shares,
        final_value,
        net_gain_loss,
        net_gain_loss_pct,
    }
}
