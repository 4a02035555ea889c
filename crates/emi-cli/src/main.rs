mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use emi_core::amortisation::AmortisationOutput;
use emi_core::ComputationOutput;

use commands::schedule::ScheduleArgs;
use output::RenderOptions;

/// EMI and amortisation schedule calculations
#[derive(Parser)]
#[command(
    name = "emi",
    version,
    about = "EMI and amortisation schedule calculations",
    long_about = "A CLI for working out equated monthly installments with decimal \
                  precision. Builds the month-by-month repayment ledger for a \
                  fixed-rate loan, applies an optional one-time prepayment, and \
                  renders the result as JSON, a table, CSV, a single value, or a \
                  printable HTML document."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Ledger page for table output (12 rows per page); out-of-range values
    /// clamp to the last page
    #[arg(long, default_value_t = 1, global = true)]
    page: usize,

    /// Currency symbol for table and html output
    #[arg(long, default_value = "₹", global = true)]
    symbol: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the month-by-month amortisation schedule for a fixed-rate loan
    Schedule(ScheduleArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
    Html,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<ComputationOutput<AmortisationOutput>, Box<dyn std::error::Error>> =
        match cli.command {
            Commands::Schedule(args) => commands::schedule::run_schedule(args),
            Commands::Version => {
                println!("emi {}", env!("CARGO_PKG_VERSION"));
                return;
            }
        };

    match result {
        Ok(value) => {
            let opts = RenderOptions {
                page: cli.page,
                symbol: cli.symbol,
            };
            output::render(&cli.output, &value, &opts);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
