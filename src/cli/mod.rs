use clap::{Parser, Subcommand};

pub mod formatters;

#[derive(Parser)]
#[command(name = "dca")]
#[command(version, about = "Dollar-cost averaging backtesting calculator")]
#[command(
    long_about = "Replay a fixed contribution schedule against a historical price series and see the shares accumulated, capital invested, and portfolio value at every interval."
)]
pub struct Cli {
    /// Disable colorized/ANSI output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Output results in JSON format
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a DCA simulation over a CSV price series
    Simulate {
        /// Path to the CSV file (needs a date column and a close/price column)
        file: String,

        /// Amount contributed at every interval
        #[arg(short, long, default_value = "100")]
        contribution: String,

        /// Extra amount invested on the first interval
        #[arg(short, long, default_value = "0")]
        initial: String,

        /// Contribution frequency
        #[arg(
            short,
            long,
            default_value = "daily",
            value_parser = ["daily", "weekly", "monthly"]
        )]
        frequency: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Print the full ledger instead of the first rows
        #[arg(short, long)]
        ledger: bool,
    },

    /// Inspect a price series CSV (row count, date range, price range)
    Inspect {
        /// Path to the CSV file
        file: String,
    },
}
