//! Screening reports.
//!
//! A [`Report`] is a titled envelope around a run's results: generation
//! timestamp, the date the snapshot describes, per-strategy summaries and
//! the full results as JSON.

use crate::summary::{ScreeningSummary, generate_screening_summaries};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use yieldlens_screen::ScreeningResults;

/// Title used when none is given.
pub const DEFAULT_TITLE: &str = "Dividend Stock Screening Report";

const DISCLAIMER: &str = "This report is for informational purposes only. Past performance \
does not guarantee future results. RSI oversold conditions do not guarantee price reversals.";

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A screening report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report title.
    pub title: String,

    /// Report generation timestamp.
    pub timestamp: DateTime<Utc>,

    /// Date the screened snapshot describes.
    pub as_of: Option<NaiveDate>,

    /// Per-strategy summaries.
    pub summaries: Vec<ScreeningSummary>,

    /// Report contents (JSON format).
    pub contents: serde_json::Value,
}

impl Report {
    /// Create a new report stamped with the current time.
    pub fn new(
        title: String,
        as_of: Option<NaiveDate>,
        summaries: Vec<ScreeningSummary>,
        contents: serde_json::Value,
    ) -> Self {
        Self {
            title,
            timestamp: Utc::now(),
            as_of,
            summaries,
            contents,
        }
    }

    /// Convert report to JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Serialization`] if the contents cannot be encoded.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the summaries as plain text.
    pub fn to_text(&self) -> String {
        let mut output = format!("{}\n", self.title);
        output.push_str(&format!("Generated: {}\n", self.timestamp.format("%Y-%m-%d %H:%M UTC")));
        if let Some(as_of) = self.as_of {
            output.push_str(&format!("Data as of: {as_of}\n"));
        }
        for summary in &self.summaries {
            output.push_str(&summary.to_ascii_table());
        }
        output
    }

    /// Render the summaries as a Markdown document.
    pub fn to_markdown(&self) -> String {
        let mut output = format!("# {}\n\n", self.title);
        output.push_str(&format!(
            "**Generated:** {}\n",
            self.timestamp.format("%Y-%m-%d %H:%M UTC")
        ));
        if let Some(as_of) = self.as_of {
            output.push_str(&format!("**Data as of:** {as_of}\n"));
        }
        output.push('\n');
        for summary in &self.summaries {
            output.push_str(&summary.to_markdown());
        }
        output.push_str(&format!("---\n\n_{DISCLAIMER}_\n"));
        output
    }

    /// Write the report as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Builder for creating reports.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    title: Option<String>,
    as_of: Option<NaiveDate>,
    summaries: Vec<ScreeningSummary>,
    contents: Option<serde_json::Value>,
}

impl ReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the snapshot date.
    pub const fn as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }

    /// Set the report contents.
    pub fn contents(mut self, contents: serde_json::Value) -> Self {
        self.contents = Some(contents);
        self
    }

    /// Summarise `results` and use them as the report contents.
    ///
    /// Summaries take the snapshot date set so far.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Serialization`] if the results cannot be encoded.
    pub fn results(mut self, results: &ScreeningResults) -> Result<Self, ReportError> {
        self.summaries = generate_screening_summaries(results, self.as_of);
        self.contents = Some(serde_json::to_value(results)?);
        Ok(self)
    }

    /// Build the report.
    pub fn build(self) -> Report {
        Report::new(
            self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            self.as_of,
            self.summaries,
            self.contents.unwrap_or(serde_json::Value::Null),
        )
    }
}
