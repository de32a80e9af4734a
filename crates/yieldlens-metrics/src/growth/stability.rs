//! Dividend stability.
//!
//! Looks at annual dividend totals for volatility and growth streaks, and
//! condenses them into a 0-100 score.

use serde::{Deserialize, Serialize};
use yieldlens_data::{DividendPayment, annual_dividend_totals};

/// Annual totals needed before stability is assessed.
pub const MIN_STABILITY_YEARS: usize = 3;

/// Volatility (percent) below which a dividend counts as stable.
pub const STABLE_VOLATILITY_PCT: f64 = 50.0;

/// Decline tolerated before a growth streak resets, as a fraction.
pub const STREAK_CUT_TOLERANCE: f64 = 0.05;

/// Dividend stability summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DividendStability {
    /// Volatility below 50%
    pub is_stable: bool,
    /// At least two growth years and the latest total above the first
    pub is_growing: bool,
    /// `(max - min) / mean * 100` over annual totals
    pub volatility_pct: Option<f64>,
    /// Current streak of years without a cut beyond 5%
    pub years_of_growth: u32,
}

/// Analyze the stability of annual dividends.
///
/// Returns the default (unstable, not growing) when fewer than three
/// calendar years have payments.
pub fn analyze_dividend_stability(payments: &[DividendPayment]) -> DividendStability {
    let annual: Vec<f64> = annual_dividend_totals(payments).into_values().collect();
    if annual.len() < MIN_STABILITY_YEARS {
        return DividendStability::default();
    }

    let mean = annual.iter().sum::<f64>() / annual.len() as f64;
    let volatility_pct = (mean > 0.0).then(|| {
        let max = annual.iter().copied().fold(f64::MIN, f64::max);
        let min = annual.iter().copied().fold(f64::MAX, f64::min);
        (max - min) / mean * 100.0
    });

    let floor = 1.0 - STREAK_CUT_TOLERANCE;
    let years_of_growth = annual
        .windows(2)
        .fold(0, |streak, w| if w[1] >= w[0] * floor { streak + 1 } else { 0 });

    let overall_growth = annual[annual.len() - 1] > annual[0];

    DividendStability {
        is_stable: volatility_pct.is_some_and(|v| v < STABLE_VOLATILITY_PCT),
        is_growing: years_of_growth >= 2 && overall_growth,
        volatility_pct,
        years_of_growth,
    }
}

/// Stability score from 0 to 100.
///
/// Up to 40 points for low volatility (full marks when stable, otherwise
/// `40 - 0.4 * volatility`), 30 points when growing, and 10 points per
/// growth year up to 30.
pub fn stability_score(stability: &DividendStability) -> f64 {
    let volatility_points = if stability.is_stable {
        40.0
    } else {
        stability
            .volatility_pct
            .filter(|&v| v < 100.0)
            .map_or(0.0, |v| (40.0 - v * 0.4).max(0.0))
    };
    let growth_points = if stability.is_growing { 30.0 } else { 0.0 };
    let streak_points = f64::from(stability.years_of_growth.min(3)) * 10.0;

    volatility_points + growth_points + streak_points
}
