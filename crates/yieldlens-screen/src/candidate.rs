//! Flat candidate records.
//!
//! A candidate is everything the screening rules look at for one symbol,
//! flattened into named optional fields. `None` means the metric could not
//! be computed and is kept distinct from zero: every rule fails closed on a
//! missing value.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use yieldlens_data::UNKNOWN_SECTOR;

/// One symbol's screening inputs.
///
/// Percentages use the percent scale (`2.5` is 2.5%). ROE and profit margin
/// are percentages too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateRecord {
    /// Ticker symbol
    pub symbol: String,
    /// Company name
    pub company_name: Option<String>,
    /// Sector label, `"Unknown"` when not reported
    pub sector: String,
    /// Current price
    pub price: Option<f64>,
    /// Market capitalization
    pub market_cap: Option<f64>,
    /// Latest annual dividend over price, percent
    pub dividend_yield: Option<f64>,
    /// Total dividends paid in the latest calendar year
    pub annual_dividend: Option<f64>,
    /// Three-year dividend CAGR, percent
    pub dividend_cagr_3y: Option<f64>,
    /// No dividend cut in the history
    pub dividend_consistent: Option<bool>,
    /// 14-day RSI
    pub rsi: Option<f64>,
    /// Price to earnings
    pub pe_ratio: Option<f64>,
    /// Price to book
    pub pb_ratio: Option<f64>,
    /// Three-year revenue CAGR, percent
    pub revenue_cagr_3y: Option<f64>,
    /// Three-year EPS CAGR, percent
    pub eps_cagr_3y: Option<f64>,
    /// Revenue CAGR is not negative
    pub revenue_growth_positive: Option<bool>,
    /// EPS CAGR is not negative
    pub eps_growth_positive: Option<bool>,
    /// Dividends over net income (over FFO for REITs), percent
    pub payout_ratio: Option<f64>,
    /// Dividends over free cash flow, percent
    pub fcf_payout_ratio: Option<f64>,
    /// Treated as a REIT for payout purposes
    pub is_reit: bool,
    /// Payout and FCF payout within sustainable limits
    pub dividend_sustainable: Option<bool>,
    /// Total debt over equity
    pub debt_to_equity: Option<f64>,
    /// Current assets over current liabilities
    pub current_ratio: Option<f64>,
    /// Balance sheet within health thresholds
    pub financially_healthy: Option<bool>,
    /// Return on equity, percent
    pub roe: Option<f64>,
    /// Net margin, percent
    pub profit_margin: Option<f64>,
    /// Profitability score, 0-100
    pub quality_score: Option<f64>,
    /// Dividend stability score, 0-100
    pub stability_score: Option<f64>,
    /// Revenue rose over the recent statements
    pub revenue_uptrend: Option<bool>,
    /// Recent periods with higher revenue than the prior one
    pub revenue_years_of_growth: Option<u32>,
    /// Net income rose over the recent statements
    pub earnings_uptrend: Option<bool>,
    /// Recent periods with higher net income than the prior one
    pub earnings_years_of_growth: Option<u32>,
    /// Annual dividend volatility below 50%
    pub dividend_stable: Option<bool>,
    /// Annual dividends trending up
    pub dividend_growing: Option<bool>,
    /// Annual dividend range over mean, percent
    pub dividend_volatility_pct: Option<f64>,
    /// Current streak of years without a dividend cut
    pub dividend_years_of_growth: Option<u32>,
}

impl Default for CandidateRecord {
    fn default() -> Self {
        Self {
            symbol: String::new(),
            company_name: None,
            sector: UNKNOWN_SECTOR.to_string(),
            price: None,
            market_cap: None,
            dividend_yield: None,
            annual_dividend: None,
            dividend_cagr_3y: None,
            dividend_consistent: None,
            rsi: None,
            pe_ratio: None,
            pb_ratio: None,
            revenue_cagr_3y: None,
            eps_cagr_3y: None,
            revenue_growth_positive: None,
            eps_growth_positive: None,
            payout_ratio: None,
            fcf_payout_ratio: None,
            is_reit: false,
            dividend_sustainable: None,
            debt_to_equity: None,
            current_ratio: None,
            financially_healthy: None,
            roe: None,
            profit_margin: None,
            quality_score: None,
            stability_score: None,
            revenue_uptrend: None,
            revenue_years_of_growth: None,
            earnings_uptrend: None,
            earnings_years_of_growth: None,
            dividend_stable: None,
            dividend_growing: None,
            dividend_volatility_pct: None,
            dividend_years_of_growth: None,
        }
    }
}

impl CandidateRecord {
    /// Create an empty record for `symbol`.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }
}

/// Parse candidate records from a JSON array.
///
/// # Errors
///
/// Returns [`crate::ScreenError::Candidates`] for malformed JSON.
pub fn parse_candidates(json: &str) -> Result<Vec<CandidateRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Read candidate records from a JSON file.
///
/// # Errors
///
/// Returns [`crate::ScreenError::Io`] when the file cannot be read and
/// [`crate::ScreenError::Candidates`] when it is not a JSON array of records.
pub fn load_candidates(path: impl AsRef<Path>) -> Result<Vec<CandidateRecord>> {
    parse_candidates(&fs::read_to_string(path)?)
}
