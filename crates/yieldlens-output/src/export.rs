//! CSV and JSON export of candidates and screening results.
//!
//! CSV output is one row per candidate with a fixed column order. Absent
//! values are written as empty cells so they never read back as zero.

use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use std::string::FromUtf8Error;
use thiserror::Error;
use yieldlens_screen::{CandidateRecord, ScoredCandidate, ScreeningResults, StrategyResults};

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writer produced invalid UTF-8.
    #[error("CSV output is not UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "pretty-json" | "pretty_json" => Ok(Self::PrettyJson),
            other => Err(ExportError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => f.write_str("csv"),
            Self::Json => f.write_str("json"),
            Self::PrettyJson => f.write_str("pretty-json"),
        }
    }
}

/// Column names of a candidate row, in write order.
pub const CANDIDATE_COLUMNS: [&str; 35] = [
    "symbol",
    "company_name",
    "sector",
    "price",
    "market_cap",
    "dividend_yield",
    "annual_dividend",
    "dividend_cagr_3y",
    "dividend_consistent",
    "rsi",
    "pe_ratio",
    "pb_ratio",
    "revenue_cagr_3y",
    "eps_cagr_3y",
    "revenue_growth_positive",
    "eps_growth_positive",
    "payout_ratio",
    "fcf_payout_ratio",
    "is_reit",
    "dividend_sustainable",
    "debt_to_equity",
    "current_ratio",
    "financially_healthy",
    "roe",
    "profit_margin",
    "quality_score",
    "stability_score",
    "revenue_uptrend",
    "revenue_years_of_growth",
    "earnings_uptrend",
    "earnings_years_of_growth",
    "dividend_stable",
    "dividend_growing",
    "dividend_volatility_pct",
    "dividend_years_of_growth",
];

/// Leading columns of a ranked row.
const RANKED_COLUMNS: [&str; 3] = ["strategy", "rank", "score"];

fn number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn flag(value: Option<bool>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn count(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn candidate_cells(c: &CandidateRecord) -> Vec<String> {
    vec![
        c.symbol.clone(),
        c.company_name.clone().unwrap_or_default(),
        c.sector.clone(),
        number(c.price),
        number(c.market_cap),
        number(c.dividend_yield),
        number(c.annual_dividend),
        number(c.dividend_cagr_3y),
        flag(c.dividend_consistent),
        number(c.rsi),
        number(c.pe_ratio),
        number(c.pb_ratio),
        number(c.revenue_cagr_3y),
        number(c.eps_cagr_3y),
        flag(c.revenue_growth_positive),
        flag(c.eps_growth_positive),
        number(c.payout_ratio),
        number(c.fcf_payout_ratio),
        c.is_reit.to_string(),
        flag(c.dividend_sustainable),
        number(c.debt_to_equity),
        number(c.current_ratio),
        flag(c.financially_healthy),
        number(c.roe),
        number(c.profit_margin),
        number(c.quality_score),
        number(c.stability_score),
        flag(c.revenue_uptrend),
        count(c.revenue_years_of_growth),
        flag(c.earnings_uptrend),
        count(c.earnings_years_of_growth),
        flag(c.dividend_stable),
        flag(c.dividend_growing),
        number(c.dividend_volatility_pct),
        count(c.dividend_years_of_growth),
    ]
}

fn write_ranked<W: Write>(
    wtr: &mut csv::Writer<W>,
    strategy: &str,
    ranked: &[ScoredCandidate],
) -> Result<(), ExportError> {
    for (rank, scored) in ranked.iter().enumerate() {
        let mut row = vec![strategy.to_string(), (rank + 1).to_string(), scored.score.to_string()];
        row.extend(candidate_cells(&scored.candidate));
        wtr.write_record(&row)?;
    }
    Ok(())
}

fn ranked_header() -> impl Iterator<Item = &'static str> {
    RANKED_COLUMNS.into_iter().chain(CANDIDATE_COLUMNS)
}

fn finish(wtr: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    Ok(String::from_utf8(wtr.into_inner().map_err(|e| e.into_error())?)?)
}

fn to_json<T: Serialize + ?Sized>(value: &T, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(value)?),
        _ => Ok(serde_json::to_string(value)?),
    }
}

/// Trait for types that can be exported.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl Exporter for [CandidateRecord] {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.write_record(CANDIDATE_COLUMNS)?;
                for candidate in self {
                    wtr.write_record(candidate_cells(candidate))?;
                }
                finish(wtr)
            }
            _ => to_json(self, format),
        }
    }
}

impl Exporter for Vec<CandidateRecord> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        self.as_slice().export_to_string(format)
    }
}

impl Exporter for StrategyResults {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.write_record(ranked_header())?;
                write_ranked(&mut wtr, self.strategy.name(), &self.qualified)?;
                finish(wtr)
            }
            _ => to_json(self, format),
        }
    }
}

impl Exporter for ScreeningResults {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.write_record(ranked_header())?;
                for results in &self.strategies {
                    write_ranked(&mut wtr, results.strategy.name(), &results.qualified)?;
                }
                finish(wtr)
            }
            _ => to_json(self, format),
        }
    }
}
