//! Dividend growth from payment history.
//!
//! Payments are summed per calendar year. The most recent calendar year is
//! used as-is even when it is still in progress.

use super::cagr::calculate_cagr;
use serde::{Deserialize, Serialize};
use yieldlens_data::{DividendPayment, annual_dividend_totals};

/// Configuration for dividend growth analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DividendGrowthConfig {
    /// Number of years the CAGR spans (default: 3)
    pub window_years: u32,
    /// Year-over-year decline tolerated before a cut is recorded, as a
    /// fraction (default: 0.0, any decrease is a cut)
    pub cut_tolerance: f64,
}

impl Default for DividendGrowthConfig {
    fn default() -> Self {
        Self {
            window_years: 3,
            cut_tolerance: 0.0,
        }
    }
}

/// Dividend growth summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DividendGrowth {
    /// Annual dividend CAGR in percent over the configured window
    pub cagr: Option<f64>,
    /// No cut anywhere in the history
    pub is_consistent: bool,
    /// Total paid in the most recent calendar year
    pub latest_annual_dividend: Option<f64>,
}

/// Analyze dividend growth with the default configuration.
pub fn analyze_dividend_growth(payments: &[DividendPayment]) -> DividendGrowth {
    analyze_dividend_growth_with(payments, &DividendGrowthConfig::default())
}

/// Analyze dividend growth.
///
/// The CAGR spans the last `window_years + 1` calendar years, or every year
/// available when fewer exist (at least two are needed). Consistency is
/// judged over the whole history, so one cut anywhere makes it `false`.
/// A single year of history is never consistent.
pub fn analyze_dividend_growth_with(
    payments: &[DividendPayment],
    config: &DividendGrowthConfig,
) -> DividendGrowth {
    let annual: Vec<f64> = annual_dividend_totals(payments).into_values().collect();
    let Some(&latest) = annual.last() else {
        return DividendGrowth::default();
    };

    let window_start = annual.len().saturating_sub(config.window_years as usize + 1);
    let years = (annual.len() - 1 - window_start) as u32;
    let cagr = calculate_cagr(annual[window_start], latest, years);

    let floor = 1.0 - config.cut_tolerance;
    let is_consistent = annual.len() >= 2 && annual.windows(2).all(|w| w[1] >= w[0] * floor);

    DividendGrowth {
        cagr,
        is_consistent,
        latest_annual_dividend: Some(latest),
    }
}
