use std::{path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{anyhow, Result};
use clap::{error::ErrorKind, ArgAction, Parser};
use tracing::Level;

use sales_cost::{
    aggregate, load_json, write_results, CatalogueEntry, Sale, Summary, DEFAULT_RESULTS_FILE,
};

/// Computes the total cost of a set of sales records, using the prices from a
/// product catalogue.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// JSON file listing products, each with a `title` and a `price`
    price_catalogue: PathBuf,
    /// JSON file listing sales, each with a `Product` and a `Quantity`
    sales_record: PathBuf,
    /// File to save the results in (overwritten on every run)
    #[arg(short, long, default_value = DEFAULT_RESULTS_FILE)]
    output: PathBuf,
    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let start = Instant::now();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            println!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    // Load both files before giving up, so every problem gets reported.
    let catalogue = load_json::<Vec<CatalogueEntry>>(&args.price_catalogue);
    let sales = load_json::<Vec<Sale>>(&args.sales_record);
    let (catalogue, sales) = match (catalogue, sales) {
        (Ok(catalogue), Ok(sales)) => (catalogue, sales),
        (catalogue, sales) => {
            for err in [catalogue.err(), sales.err()].into_iter().flatten() {
                println!("Error: {err}");
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    let report = aggregate(&catalogue, &sales);
    if !report.errors().is_empty() {
        println!("\n--- Errors found during processing ---");
        for err in report.errors() {
            println!("{err}");
        }
    }

    let summary = Summary {
        total: report.total(),
        elapsed: start.elapsed(),
    };
    let results = summary.to_string();
    println!("\n{results}");
    match write_results(&args.output, &results) {
        Ok(()) => tracing::info!(path = %args.output.display(), "saved results"),
        Err(e) => println!(
            "Error writing results file {}: {e}",
            args.output.display()
        ),
    }
    Ok(ExitCode::SUCCESS)
}
