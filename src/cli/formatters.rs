//! Output formatting module for CLI display
//!
//! This module handles all terminal output formatting, separating the
//! concerns of data calculation from presentation.

use colored::Colorize;
use rust_decimal::Decimal;
use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use dca::reports::DcaSummary;
use dca::series::PricePoint;
use dca::simulation::{DcaResult, LedgerEntry};
use dca::utils::{format_currency, format_shares, format_signed_pct};

/// Format a simulation result for JSON output
pub fn format_simulation_json(summary: &DcaSummary, result: &DcaResult) -> String {
    let payload = serde_json::json!({
        "summary": summary,
        "ledger": result.ledger,
    });

    serde_json::to_string_pretty(&payload)
        .unwrap_or_else(|e| format!(r#"{{"error": "JSON serialization failed: {}"}}"#, e))
}

/// Format the headline summary for terminal output
pub fn format_summary(summary: &DcaSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{} DCA Simulation Results\n\n", "💰".cyan().bold()));
    output.push_str(&format!("  Intervals:             {}\n", summary.intervals));
    output.push_str(&format!(
        "  Total Invested:        {}\n",
        format_currency(summary.total_invested).cyan()
    ));
    output.push_str(&format!(
        "  Total Shares:          {}\n",
        format_shares(summary.total_shares)
    ));
    output.push_str(&format!(
        "  Final Portfolio Value: {}\n",
        format_currency(summary.final_value).cyan()
    ));

    let gain_str = format_currency(summary.net_gain_loss);
    let gain_colored = if summary.net_gain_loss >= Decimal::ZERO {
        gain_str.green()
    } else {
        gain_str.red()
    };
    match summary.net_gain_loss_pct {
        Some(pct) => {
            let pct_str = format_signed_pct(pct);
            let pct_colored = if pct >= Decimal::ZERO {
                pct_str.green()
            } else {
                pct_str.red()
            };
            output.push_str(&format!(
                "  Net Gain/Loss:         {} ({})\n",
                gain_colored, pct_colored
            ));
        }
        None => {
            output.push_str(&format!("  Net Gain/Loss:         {}\n", gain_colored));
        }
    }

    output
}

/// Format ledger entries as a terminal table.
///
/// `limit` caps the number of rows shown; a trailing line reports how many
/// were omitted.
pub fn format_ledger_table(ledger: &[LedgerEntry], limit: Option<usize>) -> String {
    #[derive(Tabled)]
    struct LedgerRow {
        #[tabled(rename = "Date")]
        date: String,
        #[tabled(rename = "Price")]
        price: String,
        #[tabled(rename = "Total Shares")]
        total_shares: String,
        #[tabled(rename = "Total Invested")]
        total_invested: String,
        #[tabled(rename = "Portfolio Value")]
        portfolio_value: String,
    }

    let shown = limit.unwrap_or(ledger.len()).min(ledger.len());

    let rows: Vec<LedgerRow> = ledger
        .iter()
        .take(shown)
        .map(|entry| LedgerRow {
            date: entry.date.format("%Y-%m-%d").to_string(),
            price: format_currency(entry.price),
            total_shares: format_shares(entry.total_shares),
            total_invested: format_currency(entry.total_invested),
            portfolio_value: format_currency(entry.portfolio_value),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.modify(Columns::new(1..), Alignment::right());
    let mut output = table.to_string();

    if shown < ledger.len() {
        output.push_str(&format!(
            "\n... and {} more intervals (use --ledger to show all)",
            ledger.len() - shown
        ));
    }

    output
}

/// Format price series stats for the inspect command
pub fn format_series_stats(points: &[PricePoint]) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{} Price Series\n\n", "🔍".cyan().bold()));
    output.push_str(&format!("  Rows:       {}\n", points.len()));

    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        output.push_str(&format!("  Date range: {} → {}\n", first.date, last.date));

        let min = points.iter().map(|p| p.price).min().unwrap_or(Decimal::ZERO);
        let max = points.iter().map(|p| p.price).max().unwrap_or(Decimal::ZERO);
        output.push_str(&format!(
            "  Price:      {} low, {} high\n",
            format_currency(min),
            format_currency(max)
        ));
    }

    output
}

/// Format price series stats for JSON output
pub fn format_series_stats_json(points: &[PricePoint]) -> String {
    let payload = serde_json::json!({
        "rows": points.len(),
        "first_date": points.first().map(|p| p.date),
        "last_date": points.last().map(|p| p.date),
        "min_price": points.iter().map(|p| p.price).min(),
        "max_price": points.iter().map(|p| p.price).max(),
    });

    serde_json::to_string_pretty(&payload)
        .unwrap_or_else(|e| format!(r#"{{"error": "JSON serialization failed: {}"}}"#, e))
}
