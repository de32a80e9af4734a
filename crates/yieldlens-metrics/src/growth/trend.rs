//! Multi-year revenue and earnings trends.

use super::cagr::calculate_cagr;
use serde::{Deserialize, Serialize};
use yieldlens_data::IncomeStatement;

/// Most recent statements considered by the trend analyses.
pub const TREND_LOOKBACK: usize = 4;

/// Minimum number of statements for a trend.
pub const MIN_TREND_PERIODS: usize = 3;

/// Year-over-year trend summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// Last value above the first and at least two growth years
    pub is_uptrend: bool,
    /// Number of periods that increased over the prior one
    pub years_of_growth: u32,
    /// CAGR in percent across the analysed periods
    pub cagr: Option<f64>,
}

/// Loose upward trend over values ordered oldest first.
///
/// Needs at least three values, the last above the first, and at most one
/// period-over-period dip.
pub fn check_positive_trend(values: &[f64]) -> bool {
    if values.len() < MIN_TREND_PERIODS {
        return false;
    }
    let (Some(first), Some(last)) = (values.first(), values.last()) else {
        return false;
    };
    if first >= last {
        return false;
    }
    values.windows(2).filter(|w| w[1] < w[0]).count() <= 1
}

/// Revenue trend over the most recent statements (newest first).
pub fn analyze_revenue_trend(income_statements: &[IncomeStatement]) -> TrendAnalysis {
    revenue_trend(income_statements).unwrap_or_default()
}

/// Net income trend over the most recent statements (newest first).
///
/// Any loss-making period voids the trend.
pub fn analyze_earnings_trend(income_statements: &[IncomeStatement]) -> TrendAnalysis {
    earnings_trend(income_statements).unwrap_or_default()
}

/// Revenue trend, or `None` when there are too few statements or a
/// revenue figure is missing.
pub fn revenue_trend(income_statements: &[IncomeStatement]) -> Option<TrendAnalysis> {
    recent_oldest_first(income_statements, |s| s.revenue).map(|values| trend_of(&values))
}

/// Net income trend, or `None` when the trend is void.
pub fn earnings_trend(income_statements: &[IncomeStatement]) -> Option<TrendAnalysis> {
    recent_oldest_first(income_statements, |s| s.net_income)
        .filter(|values| values.iter().all(|&v| v > 0.0))
        .map(|values| trend_of(&values))
}

fn recent_oldest_first(
    income_statements: &[IncomeStatement],
    field: fn(&IncomeStatement) -> Option<f64>,
) -> Option<Vec<f64>> {
    if income_statements.len() < MIN_TREND_PERIODS {
        return None;
    }
    income_statements
        .iter()
        .take(TREND_LOOKBACK)
        .rev()
        .map(field)
        .collect()
}

fn trend_of(values: &[f64]) -> TrendAnalysis {
    let years_of_growth = values.windows(2).filter(|w| w[1] > w[0]).count() as u32;
    let (first, last) = (values[0], values[values.len() - 1]);

    TrendAnalysis {
        is_uptrend: last > first && years_of_growth >= 2,
        years_of_growth,
        cagr: calculate_cagr(first, last, (values.len() - 1) as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn statements(revenues: &[f64]) -> Vec<IncomeStatement> {
        revenues
            .iter()
            .map(|&value| IncomeStatement {
                revenue: Some(value),
                net_income: Some(value / 10.0),
                ..Default::default()
            })
            .collect()
    }

    #[rstest]
    #[case(&[1.0, 2.0, 3.0], true)]
    #[case(&[1.0, 3.0, 2.0, 4.0], true)]
    #[case(&[1.0, 3.0, 2.0, 4.0, 3.5, 5.0], false)]
    #[case(&[3.0, 2.0, 3.0], false)]
    #[case(&[1.0, 2.0], false)]
    #[case(&[], false)]
    fn test_positive_trend(#[case] values: &[f64], #[case] expected: bool) {
        assert_eq!(check_positive_trend(values), expected);
    }

    #[test]
    fn test_revenue_uptrend() {
        // newest first
        let trend = analyze_revenue_trend(&statements(&[133.1, 121.0, 110.0, 100.0, 50.0]));
        assert!(trend.is_uptrend);
        assert_eq!(trend.years_of_growth, 3);
        assert_relative_eq!(trend.cagr.unwrap(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_revenue_single_growth_year_is_not_uptrend() {
        let trend = analyze_revenue_trend(&statements(&[120.0, 90.0, 100.0]));
        assert!(!trend.is_uptrend);
        assert_eq!(trend.years_of_growth, 1);
        assert!(trend.cagr.is_some());
    }

    #[test]
    fn test_too_few_statements() {
        assert_eq!(analyze_revenue_trend(&statements(&[2.0, 1.0])), TrendAnalysis::default());
        assert_eq!(analyze_earnings_trend(&[]), TrendAnalysis::default());
    }

    #[test]
    fn test_earnings_loss_voids_trend() {
        let mut data = statements(&[130.0, 120.0, 110.0, 100.0]);
        assert!(analyze_earnings_trend(&data).is_uptrend);

        data[2].net_income = Some(-5.0);
        assert_eq!(analyze_earnings_trend(&data), TrendAnalysis::default());
    }

    #[test]
    fn test_missing_value_voids_trend() {
        let mut data = statements(&[130.0, 120.0, 110.0]);
        data[1].revenue = None;
        assert_eq!(analyze_revenue_trend(&data), TrendAnalysis::default());
    }

    #[test]
    fn test_void_trend_is_none() {
        let mut data = statements(&[130.0, 120.0, 110.0]);
        assert!(revenue_trend(&data).is_some());
        assert_eq!(revenue_trend(&data[..2]), None);

        // flat revenue is still a defined trend
        let flat = statements(&[100.0, 100.0, 100.0]);
        assert_eq!(revenue_trend(&flat).map(|t| t.years_of_growth), Some(0));

        data[0].net_income = Some(0.0);
        assert_eq!(earnings_trend(&data), None);
    }
}
