//! Screening snapshots.
//!
//! A snapshot is the already-fetched input for one screening run: for every
//! symbol, its profile, recent price bars, dividend payments, statements and
//! key metrics. Fetching is out of scope here; snapshots are read from JSON
//! produced by whatever collector sits upstream.

use crate::dividends::DividendPayment;
use crate::error::{DataError, Result};
use crate::prices::{PriceBar, PriceSeries};
use crate::profile::StockProfile;
use crate::statements::{BalanceSheet, CashFlowStatement, IncomeStatement, KeyMetrics};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything known about one symbol at snapshot time.
///
/// Price bars and statements are stored in provider order (newest first).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SymbolSnapshot {
    /// Company profile and quote
    pub profile: StockProfile,
    /// Daily bars, newest first
    pub prices: Vec<PriceBar>,
    /// Dividend payments in any order
    pub dividends: Vec<DividendPayment>,
    /// Income statements, newest first
    pub income_statements: Vec<IncomeStatement>,
    /// Balance sheets, newest first
    pub balance_sheets: Vec<BalanceSheet>,
    /// Cash flow statements, newest first
    pub cash_flows: Vec<CashFlowStatement>,
    /// Key metrics, newest first
    pub key_metrics: Vec<KeyMetrics>,
}

impl SymbolSnapshot {
    /// Ticker symbol.
    pub fn symbol(&self) -> &str {
        &self.profile.symbol
    }

    /// Closing prices ordered oldest to newest.
    pub fn price_series(&self) -> PriceSeries {
        PriceSeries::from_bars_newest_first(&self.prices)
    }

    /// Quote price, falling back to the most recent close.
    pub fn current_price(&self) -> Option<f64> {
        self.profile.price.or_else(|| self.prices.first().map(|bar| bar.close))
    }
}

/// Input for one screening run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreeningSnapshot {
    /// Date the data was collected
    pub as_of: Option<NaiveDate>,
    /// Per-symbol data
    pub symbols: Vec<SymbolSnapshot>,
}

impl ScreeningSnapshot {
    /// Parse a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Serialization`] for malformed JSON and
    /// [`DataError::InvalidSymbol`] when any entry has an empty symbol.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Number of symbols in the snapshot.
    pub const fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the snapshot holds no symbols.
    pub const fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    fn validate(&self) -> Result<()> {
        for (index, entry) in self.symbols.iter().enumerate() {
            if entry.symbol().trim().is_empty() {
                return Err(DataError::InvalidSymbol(format!(
                    "empty symbol at position {index}"
                )));
            }
        }
        Ok(())
    }
}

/// Read and validate a snapshot file.
///
/// # Errors
///
/// Returns [`DataError::Io`] when the file cannot be read, otherwise the
/// errors of [`ScreeningSnapshot::from_json_str`].
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<ScreeningSnapshot> {
    let contents = fs::read_to_string(path)?;
    ScreeningSnapshot::from_json_str(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "asOf": "2025-01-31",
        "symbols": [
            {
                "profile": {"symbol": "ABC", "sector": "Industrials", "price": 50.0},
                "prices": [
                    {"date": "2025-01-31", "close": 50.0},
                    {"date": "2025-01-30", "close": 51.0}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_snapshot() {
        let snapshot = ScreeningSnapshot::from_json_str(SNAPSHOT).unwrap();
        assert_eq!(snapshot.as_of, NaiveDate::from_ymd_opt(2025, 1, 31));
        assert_eq!(snapshot.len(), 1);

        let abc = &snapshot.symbols[0];
        assert_eq!(abc.symbol(), "ABC");
        assert_eq!(abc.price_series().closes(), &[51.0, 50.0]);
        assert!(abc.income_statements.is_empty());
    }

    #[test]
    fn test_current_price_falls_back_to_latest_close() {
        let mut entry = SymbolSnapshot::default();
        entry.prices.push(PriceBar {
            date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            close: 42.0,
        });
        assert_eq!(entry.current_price(), Some(42.0));

        entry.profile.price = Some(43.0);
        assert_eq!(entry.current_price(), Some(43.0));
    }

    #[test]
    fn test_empty_symbol_rejected() {
        let json = r#"{"symbols": [{"profile": {"symbol": " "}}]}"#;
        let result = ScreeningSnapshot::from_json_str(json);
        assert!(matches!(result, Err(DataError::InvalidSymbol(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = ScreeningSnapshot::from_json_str("{not json");
        assert!(matches!(result, Err(DataError::Serialization(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_snapshot("/nonexistent/yieldlens/snapshot.json");
        assert!(matches!(result, Err(DataError::Io(_))));
    }
}
