mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::aov::AovArgs;
use commands::catalog::LookupArgs;
use commands::margin::{TableArgs, UnitArgs};
use commands::scenario::ProjectArgs;
use commands::summary::SummaryArgs;

/// Quantity-break pricing and gross-margin calculations
#[derive(Parser)]
#[command(
    name = "pricer",
    version,
    about = "Quantity-break pricing and gross-margin calculator",
    long_about = "A CLI for quantity-break pricing work with decimal precision: \
                  per-break margin tables, discount/growth scenario comparisons, \
                  category roll-ups, and average-order-value projections over a \
                  CSV product catalog."
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
    /// Unit metrics for one list price / cost / discount combination
    Unit(UnitArgs),
    /// Per-quantity-break pricing table
    Table(TableArgs),
    /// Original vs scenario margin comparison with growth projection
    Project(ProjectArgs),
    /// Gross-margin roll-up by catalog category
    Summary(SummaryArgs),
    /// Average order value projection across quantity breaks
    Aov(AovArgs),
    /// Show one product record from the catalog
    Lookup(LookupArgs),
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
        Commands::Unit(args) => commands::margin::run_unit(args),
        Commands::Table(args) => commands::margin::run_table(args),
        Commands::Project(args) => commands::scenario::run_project(args),
        Commands::Summary(args) => commands::summary::run_summary(args),
        Commands::Aov(args) => commands::aov::run_aov(args),
        Commands::Lookup(args) => commands::catalog::run_lookup(args),
        Commands::Version => {
            println!("pricer {}", env!("CARGO_PKG_VERSION"));
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
