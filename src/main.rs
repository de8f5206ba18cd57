use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use threeway::cli;

#[derive(Parser)]
#[command(name = "threeway")]
#[command(about = "Generate the Transurban Group (ASX: TCL) three-way financial model as .xlsx")]
#[command(long_about = "Generate a formatted five-sheet Excel workbook containing a three-way
financial model for Transurban Group (ASX: TCL): hardcoded FY21-FY25
historicals and formula-driven FY26F-FY30F forecasts.

Sheets: Assumptions, Income Statement, Balance Sheet, Cash Flow
Statement, Notes. Forecast cells are live Excel formulas wired to the
Assumptions sheet, so drivers can be flexed in the saved file without
re-running this tool.")]
#[command(version)]
struct Cli {
    /// Output path for the workbook
    #[arg(short, long, default_value = cli::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Show per-sheet build detail
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Cli::parse();

    if let Err(e) = cli::generate(args.output, args.verbose) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
