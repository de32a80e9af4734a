//! Screening pipeline: configuration, candidate assembly and rendering.

use crate::cli::{OutputFormat, ScreenOptions};
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use yieldlens::data::{ScreeningSnapshot, SymbolSnapshot};
use yieldlens::output::{ExportFormat, Exporter, ReportBuilder};
use yieldlens::screen::{
    CandidateBuilder, CandidateRecord, ReitDetection, ScreeningConfig, ScreeningResults,
};

/// Default configuration file location.
pub(crate) fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("yieldlens").join("config.toml"))
}

/// Load the configuration and apply command-line overrides.
///
/// An explicit `--config` must exist; the default location is optional.
pub(crate) fn resolve_config(
    options: &ScreenOptions,
) -> Result<ScreeningConfig, Box<dyn Error>> {
    let config = match (&options.config, default_config_path()) {
        (Some(path), _) => {
            info!(path = %path.display(), "loading configuration");
            ScreeningConfig::load(path)?
        }
        (None, Some(path)) if path.exists() => {
            info!(path = %path.display(), "loading default configuration");
            ScreeningConfig::load(&path)?
        }
        _ => {
            debug!("no configuration file, using defaults");
            ScreeningConfig::default()
        }
    };
    Ok(apply_overrides(config, options))
}

fn apply_overrides(mut config: ScreeningConfig, options: &ScreenOptions) -> ScreeningConfig {
    if let Some(kind) = options.strategy.kind() {
        config = config.with_strategy(kind);
    }
    if let Some(top) = options.top {
        config = config.with_top_n(top);
    }
    config
}

/// Snapshot entries with first-seen symbols only.
pub(crate) fn unique_symbols(symbols: &[SymbolSnapshot]) -> Vec<&SymbolSnapshot> {
    let mut seen = HashSet::new();
    symbols
        .iter()
        .filter(|snapshot| {
            let first = seen.insert(snapshot.symbol());
            if !first {
                warn!(symbol = snapshot.symbol(), "duplicate symbol skipped");
            }
            first
        })
        .collect()
}

/// Compute a candidate record for every symbol in the snapshot.
pub(crate) fn build_candidates(
    snapshot: &ScreeningSnapshot,
    builder: &CandidateBuilder<ReitDetection>,
) -> Result<Vec<CandidateRecord>, Box<dyn Error>> {
    let symbols = unique_symbols(&snapshot.symbols);

    let pb = ProgressBar::new(symbols.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("█▓░"),
    );
    pb.set_message("Computing metrics...");

    let candidates = symbols
        .into_iter()
        .map(|symbol| {
            pb.inc(1);
            builder.build(symbol)
        })
        .collect::<Vec<_>>();

    pb.finish_with_message(format!("Computed metrics for {} symbols", candidates.len()));
    Ok(candidates)
}

/// Render results in the requested format.
pub(crate) fn render(
    results: &ScreeningResults,
    as_of: Option<NaiveDate>,
    format: OutputFormat,
) -> Result<String, Box<dyn Error>> {
    let builder = match as_of {
        Some(date) => ReportBuilder::new().as_of(date),
        None => ReportBuilder::new(),
    };
    let report = builder.results(results)?.build();

    Ok(match format {
        OutputFormat::Text => report.to_text(),
        OutputFormat::Markdown => report.to_markdown(),
        OutputFormat::Csv => results.export_to_string(ExportFormat::Csv)?,
        OutputFormat::Json => report.to_json()?,
    })
}

/// Print `content` or write it to `path`.
pub(crate) fn emit(content: &str, path: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match path {
        Some(path) => {
            fs::write(path, content)?;
            info!(path = %path.display(), "output written");
        }
        None => print!("{content}"),
    }
    Ok(())
}
