//! Revenue and EPS growth across income statements.

use super::cagr::calculate_cagr;
use serde::{Deserialize, Serialize};
use yieldlens_data::IncomeStatement;

/// Number of years spanned by the fundamental growth window.
pub const GROWTH_WINDOW_YEARS: usize = 3;

/// Revenue and EPS CAGR, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthMetrics {
    /// Revenue CAGR over up to three years
    pub revenue_cagr_3y: Option<f64>,
    /// EPS CAGR over up to three years
    pub eps_cagr_3y: Option<f64>,
}

impl GrowthMetrics {
    /// Revenue did not shrink over the window. `None` when the CAGR is undefined.
    pub fn revenue_growth_positive(&self) -> Option<bool> {
        self.revenue_cagr_3y.map(|cagr| cagr >= 0.0)
    }

    /// EPS did not shrink over the window. `None` when the CAGR is undefined.
    pub fn eps_growth_positive(&self) -> Option<bool> {
        self.eps_cagr_3y.map(|cagr| cagr >= 0.0)
    }
}

/// Revenue and EPS CAGR between the latest statement and the one three
/// periods earlier (or the oldest available).
///
/// Statements are ordered newest first. Fewer than two statements leaves
/// both rates undefined.
pub fn analyze_growth_metrics(income_statements: &[IncomeStatement]) -> GrowthMetrics {
    if income_statements.len() < 2 {
        return GrowthMetrics::default();
    }
    let start_index = GROWTH_WINDOW_YEARS.min(income_statements.len() - 1);
    let latest = &income_statements[0];
    let start = &income_statements[start_index];
    let years = start_index as u32;

    let cagr = |field: fn(&IncomeStatement) -> Option<f64>| {
        calculate_cagr(field(start)?, field(latest)?, years)
    };

    GrowthMetrics {
        revenue_cagr_3y: cagr(|s| s.revenue),
        eps_cagr_3y: cagr(|s| s.eps),
    }
}
