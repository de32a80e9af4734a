//! Closing price history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily price bar as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Trading date
    pub date: NaiveDate,
    /// Closing price
    pub close: f64,
}

/// Closing prices ordered oldest to newest.
///
/// Ordering is the caller's responsibility: nothing checks for gaps or
/// duplicate dates. Indicators computed on a reversed series give different
/// results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    closes: Vec<f64>,
}

impl PriceSeries {
    /// Wrap closes that are already ordered oldest to newest.
    pub const fn from_closes(closes: Vec<f64>) -> Self {
        Self { closes }
    }

    /// Build a series from bars delivered newest first.
    pub fn from_bars_newest_first(bars: &[PriceBar]) -> Self {
        Self {
            closes: bars.iter().rev().map(|bar| bar.close).collect(),
        }
    }

    /// Closing prices, oldest first.
    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// Most recent close.
    pub fn latest(&self) -> Option<f64> {
        self.closes.last().copied()
    }

    /// Number of closes.
    pub const fn len(&self) -> usize {
        self.closes.len()
    }

    /// Whether the series has no closes.
    pub const fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }
}
