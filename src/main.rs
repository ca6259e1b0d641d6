mod cli;

use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;
use clap::Parser;
use colored::Colorize;
use rust_decimal::Decimal;
use tracing::info;

use cli::{Cli, Commands};
use dca::importers::parse_price_csv;
use dca::reports::summarize;
use dca::series::{filter_range, parse_frequency, resample, Frequency};
use dca::simulation::accumulate;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Simulate {
            file,
            contribution,
            initial,
            frequency,
            from,
            to,
            ledger,
        } => handle_simulate(
            &file,
            &contribution,
            &initial,
            &frequency,
            from.as_deref(),
            to.as_deref(),
            ledger,
            cli.json,
        ),

        Commands::Inspect { file } => handle_inspect(&file, cli.json),
    }
}

fn parse_amount(value: &str, name: &str) -> Result<Decimal> {
    Decimal::from_str(value)
        .map_err(|_| anyhow!("Invalid {} '{}'. Use a number like 100 or 250.50", name, value))
}

fn parse_date(value: &str, name: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid {} date: {}. Use YYYY-MM-DD format.", name, value))
}

/// Handle simulate command
#[allow(clippy::too_many_arguments)]
fn handle_simulate(
    file_path: &str,
    contribution: &str,
    initial: &str,
    frequency: &str,
    from: Option<&str>,
    to: Option<&str>,
    full_ledger: bool,
    json_output: bool,
) -> Result<()> {
    let contribution = parse_amount(contribution, "contribution")?;
    let initial = parse_amount(initial, "initial investment")?;
    let frequency = parse_frequency(frequency)?;

    let from = from.map(|d| parse_date(d, "start")).transpose()?;
    let to = to.map(|d| parse_date(d, "end")).transpose()?;
    if let (Some(f), Some(t)) = (from, to) {
        if f >= t {
            bail!("Start date must be earlier than end date");
        }
    }

    info!("Running DCA simulation over: {}", file_path);

    let points = parse_price_csv(file_path)?;
    let points = filter_range(&points, from, to);
    let points = resample(&points, frequency);

    if points.is_empty() {
        println!(
            "\n{} No price data in the selected date range",
            "ℹ".blue().bold()
        );
        return Ok(());
    }

    if frequency != Frequency::Daily {
        info!(
            "Resampled to {} {} intervals",
            points.len(),
            frequency.as_str()
        );
    }

    let result = accumulate(&points, contribution, initial)?;
    let summary = summarize(&result);

    if json_output {
        println!("{}", cli::formatters::format_simulation_json(&summary, &result));
        return Ok(());
    }

    print!("{}", cli::formatters::format_summary(&summary));

    let limit = if full_ledger { None } else { Some(10) };
    println!("\n{}", cli::formatters::format_ledger_table(&result.ledger, limit));

    Ok(())
}

/// Handle inspect command
fn handle_inspect(file_path: &str, json_output: bool) -> Result<()> {
    let points = parse_price_csv(file_path)?;

    if json_output {
        println!("{}", cli::formatters::format_series_stats_json(&points));
        return Ok(());
    }

    print!("{}", cli::formatters::format_series_stats(&points));
    Ok(())
}
