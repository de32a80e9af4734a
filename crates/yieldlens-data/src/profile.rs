//! Company profile and quote fields.

use crate::gics::GicsSector;
use serde::{Deserialize, Serialize};

/// Sector tag used when the provider reports none.
pub const UNKNOWN_SECTOR: &str = "Unknown";

/// Profile of a listed company at snapshot time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockProfile {
    /// Ticker symbol
    pub symbol: String,
    /// Company name
    pub company_name: Option<String>,
    /// Sector label as reported upstream
    pub sector: Option<String>,
    /// Industry label as reported upstream (e.g. "REIT - Specialty")
    pub industry: Option<String>,
    /// Last traded price
    pub price: Option<f64>,
    /// Market capitalization
    pub market_cap: Option<f64>,
}

impl StockProfile {
    /// Create a profile carrying only a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    /// Set the sector label.
    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Set the industry label.
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Sector label, or `"Unknown"` when the provider reported none.
    pub fn sector_or_unknown(&self) -> &str {
        self.sector
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_SECTOR)
    }

    /// GICS sector parsed from the sector label, if it maps onto one.
    pub fn gics_sector(&self) -> Option<GicsSector> {
        self.sector.as_deref().and_then(GicsSector::from_provider_name)
    }
}
