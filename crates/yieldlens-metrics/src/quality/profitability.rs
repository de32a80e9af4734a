//! Profitability quality score.

use serde::{Deserialize, Serialize};
use yieldlens_data::{IncomeStatement, KeyMetrics};

/// ROE (percent) earning the full ROE half of the score.
pub const FULL_MARKS_ROE: f64 = 20.0;

/// Net margin (percent) earning the full margin half of the score.
pub const FULL_MARKS_MARGIN: f64 = 15.0;

/// Profitability and its 0-100 score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    /// Return on equity in percent
    pub roe: Option<f64>,
    /// Net income over revenue in percent
    pub profit_margin: Option<f64>,
    /// 0-100, half from ROE and half from margin
    pub score: f64,
}

/// Score profitability from the latest key metrics and income statement.
///
/// ROE earns up to 50 points, reached at 20%. Profit margin earns up to 50
/// points, reached at 15%. Losses and missing values earn nothing.
///
/// The margin comes from the latest income statement, falling back to the
/// provider's `netProfitMargin` when the statement cannot produce one.
pub fn calculate_quality_score(
    key_metrics: &[KeyMetrics],
    income_statements: &[IncomeStatement],
) -> QualityScore {
    let latest_metrics = key_metrics.first();
    let roe = latest_metrics
        .and_then(|metrics| metrics.roe)
        .map(|fraction| fraction * 100.0);
    let profit_margin = income_statements
        .first()
        .and_then(|income| {
            let revenue = income.revenue.filter(|&r| r > 0.0)?;
            Some(income.net_income? / revenue * 100.0)
        })
        .or_else(|| {
            latest_metrics
                .and_then(|metrics| metrics.net_profit_margin)
                .map(|fraction| fraction * 100.0)
        });

    let points = |value: Option<f64>, full_marks: f64| {
        value.map_or(0.0, |v| (v / full_marks * 50.0).clamp(0.0, 50.0))
    };

    QualityScore {
        roe,
        profit_margin,
        score: points(roe, FULL_MARKS_ROE) + points(profit_margin, FULL_MARKS_MARGIN),
    }
}
