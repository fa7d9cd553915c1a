mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::payment::{PaymentArgs, SchedulesArgs, ValidateArgs};

/// CMHC-aware mortgage payment calculations
#[derive(Parser)]
#[command(
    name = "mtg",
    version,
    about = "CMHC-aware mortgage payment calculations",
    long_about = "A CLI for computing periodic mortgage payments with decimal \
                  precision. Handles payment schedules, CMHC default-insurance \
                  premiums, and per-field validation of raw form input."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the periodic payment for a loan request
    Payment(PaymentArgs),
    /// Validate a raw loan request and report per-field errors
    Validate(ValidateArgs),
    /// List the supported payment schedules
    Schedules(SchedulesArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payment(args) => commands::payment::run_payment(args),
        Commands::Validate(args) => commands::payment::run_validate(args),
        Commands::Schedules(args) => commands::payment::run_schedules(args),
        Commands::Version => {
            println!("mtg {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
