//! Yieldlens CLI binary.
//!
//! Screens dividend stocks from a snapshot or from pre-built candidate
//! records, and exposes the RSI and metric registry on the command line.

mod cli;
mod pipeline;

use clap::Parser;
use cli::{Cli, Command, ScreenOptions};
use pipeline::{build_candidates, emit, render, resolve_config};
use std::error::Error;
use std::path::Path;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;
use yieldlens::data::load_snapshot;
use yieldlens::metrics::{MetricCategory, RsiConfig, available_metrics, metrics_by_category};
use yieldlens::screen::{CandidateBuilder, Screener, load_candidates};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Install the stderr subscriber. `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Screen { input, options } => screen(&input, &options),
        Command::Qualify { input, options } => qualify(&input, &options),
        Command::Rsi { period, prices } => rsi(period, &prices),
        Command::Metrics { category } => list_metrics(category.as_deref()),
    }
}

fn screen(input: &Path, options: &ScreenOptions) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(options)?;
    let snapshot = load_snapshot(input)?;
    info!(symbols = snapshot.len(), as_of = ?snapshot.as_of, "snapshot loaded");

    let builder = CandidateBuilder::from_config(&config);
    let candidates = build_candidates(&snapshot, &builder)?;
    let results = Screener::new(&config).run(&candidates);

    emit(&render(&results, snapshot.as_of, options.format)?, options.output.as_deref())
}

fn qualify(input: &Path, options: &ScreenOptions) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(options)?;
    let candidates = load_candidates(input)?;
    info!(candidates = candidates.len(), "candidates loaded");

    let results = Screener::new(&config).run(&candidates);
    emit(&render(&results, None, options.format)?, options.output.as_deref())
}

fn rsi(period: usize, prices: &[f64]) -> Result<(), Box<dyn Error>> {
    let config = RsiConfig {
        period,
        ..Default::default()
    };
    let value = config.calculate(prices).ok_or_else(|| {
        format!(
            "RSI({period}) needs at least {} prices, got {}",
            period.saturating_add(1),
            prices.len()
        )
    })?;

    let marker = if config.is_oversold(value) { " (oversold)" } else { "" };
    println!("RSI({period}): {value:.2}{marker}");
    Ok(())
}

fn list_metrics(category: Option<&str>) -> Result<(), Box<dyn Error>> {
    let metrics = match category {
        Some(name) => {
            let category = MetricCategory::from_name(name).ok_or_else(|| {
                let known: Vec<_> = MetricCategory::all().iter().map(|c| c.name()).collect();
                format!("unknown category '{name}' (expected one of: {})", known.join(", "))
            })?;
            metrics_by_category(category)
        }
        None => available_metrics(),
    };

    println!("{:<26} {:<10} Description", "Metric", "Category");
    println!("{}", "-".repeat(80));
    for metric in &metrics {
        println!("{:<26} {:<10} {}", metric.name, metric.category.name(), metric.description);
    }
    Ok(())
}
