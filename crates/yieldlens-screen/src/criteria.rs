//! Screening thresholds.
//!
//! Every bound is inclusive except `max_debt_to_equity`, which is strict.

use serde::{Deserialize, Serialize};

/// Thresholds for the dividend growth pullback strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthPullbackCriteria {
    /// Minimum three-year dividend CAGR in percent (default: 12.0)
    pub min_dividend_cagr: f64,
    /// Minimum dividend yield in percent (default: 1.5)
    pub min_dividend_yield: f64,
    /// Maximum RSI (default: 40.0)
    pub max_rsi: f64,
    /// Minimum market capitalization (default: 2 billion)
    pub min_market_cap: f64,
    /// Debt-to-equity must stay strictly below this (default: 2.0)
    pub max_debt_to_equity: f64,
}

impl Default for GrowthPullbackCriteria {
    fn default() -> Self {
        Self {
            min_dividend_cagr: 12.0,
            min_dividend_yield: 1.5,
            max_rsi: 40.0,
            min_market_cap: 2_000_000_000.0,
            max_debt_to_equity: 2.0,
        }
    }
}

/// Thresholds for the value dividend strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueDividendCriteria {
    /// Maximum positive P/E (default: 20.0)
    pub max_pe_ratio: f64,
    /// Maximum positive P/B (default: 2.0)
    pub max_pb_ratio: f64,
    /// Minimum dividend yield in percent (default: 3.0)
    pub min_dividend_yield: f64,
    /// Maximum RSI (default: 40.0)
    pub max_rsi: f64,
    /// Minimum three-year dividend CAGR in percent (default: 5.0)
    pub min_dividend_cagr: f64,
    /// Maximum annual dividend volatility in percent, waived for steady
    /// growers (default: off)
    pub max_dividend_volatility: Option<f64>,
}

impl Default for ValueDividendCriteria {
    fn default() -> Self {
        Self {
            max_pe_ratio: 20.0,
            max_pb_ratio: 2.0,
            min_dividend_yield: 3.0,
            max_rsi: 40.0,
            min_dividend_cagr: 5.0,
            max_dividend_volatility: None,
        }
    }
}
