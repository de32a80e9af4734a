//! Dividend payout ratios.
//!
//! All ratios are percentages computed from the most recent statement of
//! each sequence. Dividends paid are taken by magnitude, so the outflow
//! (negative) and inflow (positive) sign conventions give the same result.

use super::ffo::calculate_ffo_payout_ratio;
use serde::{Deserialize, Serialize};
use yieldlens_data::{CashFlowStatement, IncomeStatement, KeyMetrics};

/// Payout ratios for one company, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoutRatios {
    /// Dividends over net income, or over FFO for REITs
    pub payout_ratio: Option<f64>,
    /// Dividends over free cash flow
    pub fcf_payout_ratio: Option<f64>,
}

/// Compute payout ratios from the latest income and cash flow statements.
///
/// For REITs `payout_ratio` is the FFO payout ratio. `fcf_payout_ratio` is
/// computed the same way for both. A ratio is `None` when its base is
/// missing or not positive, or when dividends paid were not reported.
pub fn calculate_payout_ratios(
    income_statements: &[IncomeStatement],
    cash_flows: &[CashFlowStatement],
    is_reit: bool,
) -> PayoutRatios {
    let Some(latest_cf) = cash_flows.first() else {
        return PayoutRatios::default();
    };
    let dividends = latest_cf.dividends_paid_abs();

    let payout_ratio = if is_reit {
        calculate_ffo_payout_ratio(cash_flows)
    } else {
        income_statements
            .first()
            .and_then(|income| income.net_income)
            .and_then(|net_income| ratio_of(dividends?, net_income))
    };

    let fcf_payout_ratio = latest_cf
        .free_cash_flow
        .and_then(|fcf| ratio_of(dividends?, fcf));

    PayoutRatios {
        payout_ratio,
        fcf_payout_ratio,
    }
}

/// Payout ratio reported in the latest key metrics, converted to percent.
pub fn get_payout_ratio_from_metrics(key_metrics: &[KeyMetrics]) -> Option<f64> {
    key_metrics
        .first()
        .and_then(|metrics| metrics.payout_ratio)
        .map(|fraction| fraction * 100.0)
}

fn ratio_of(amount: f64, base: f64) -> Option<f64> {
    (base > 0.0).then(|| amount / base * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn income(net_income: f64) -> IncomeStatement {
        IncomeStatement {
            net_income: Some(net_income),
            ..Default::default()
        }
    }

    fn cash_flow(dividends_paid: f64, fcf: f64) -> CashFlowStatement {
        CashFlowStatement {
            net_income: Some(2_486_000_000.0),
            dividends_paid: Some(dividends_paid),
            free_cash_flow: Some(fcf),
            ..Default::default()
        }
    }

    #[test]
    fn test_non_reit_ratios() {
        let ratios = calculate_payout_ratios(
            &[income(2_486_000_000.0)],
            &[cash_flow(-786_000_000.0, 2_298_000_000.0)],
            false,
        );
        assert_relative_eq!(ratios.payout_ratio.unwrap(), 31.6, epsilon = 0.5);
        assert_relative_eq!(ratios.fcf_payout_ratio.unwrap(), 34.2, epsilon = 0.5);
    }

    #[rstest]
    #[case(-786_000_000.0)]
    #[case(786_000_000.0)]
    fn test_dividend_sign_convention(#[case] dividends_paid: f64) {
        let ratios = calculate_payout_ratios(
            &[income(2_486_000_000.0)],
            &[cash_flow(dividends_paid, 2_298_000_000.0)],
            false,
        );
        assert_relative_eq!(
            ratios.payout_ratio.unwrap(),
            786.0 / 2_486.0 * 100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(calculate_payout_ratios(&[], &[], false), PayoutRatios::default());
        assert_eq!(calculate_payout_ratios(&[], &[], true), PayoutRatios::default());
    }

    #[test]
    fn test_missing_income_keeps_fcf_ratio() {
        let ratios = calculate_payout_ratios(&[], &[cash_flow(-50.0, 200.0)], false);
        assert_eq!(ratios.payout_ratio, None);
        assert_relative_eq!(ratios.fcf_payout_ratio.unwrap(), 25.0);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1_000.0)]
    fn test_non_positive_net_income(#[case] net_income: f64) {
        let ratios = calculate_payout_ratios(&[income(net_income)], &[cash_flow(-50.0, 200.0)], false);
        assert_eq!(ratios.payout_ratio, None);
    }

    #[test]
    fn test_missing_dividends_vs_zero_dividends() {
        let mut cf = cash_flow(0.0, 200.0);
        let ratios = calculate_payout_ratios(&[income(100.0)], std::slice::from_ref(&cf), false);
        assert_eq!(ratios.payout_ratio, Some(0.0));
        assert_eq!(ratios.fcf_payout_ratio, Some(0.0));

        cf.dividends_paid = None;
        let ratios = calculate_payout_ratios(&[income(100.0)], &[cf], false);
        assert_eq!(ratios, PayoutRatios::default());
    }

    #[test]
    fn test_reit_uses_ffo() {
        let cf = CashFlowStatement {
            net_income: Some(814_000_000.0),
            depreciation_and_amortization: Some(2_009_000_000.0),
            dividends_paid: Some(-1_643_000_000.0),
            free_cash_flow: Some(3_700_000_000.0),
            ..Default::default()
        };
        let statements = [income(814_000_000.0)];

        let reit = calculate_payout_ratios(&statements, std::slice::from_ref(&cf), true);
        let plain = calculate_payout_ratios(&statements, std::slice::from_ref(&cf), false);

        assert_relative_eq!(reit.payout_ratio.unwrap(), 58.2, epsilon = 0.5);
        assert!(plain.payout_ratio.unwrap() > 200.0);
        assert_eq!(reit.fcf_payout_ratio, plain.fcf_payout_ratio);
    }

    #[test]
    fn test_payout_ratio_from_metrics() {
        let metrics = KeyMetrics {
            payout_ratio: Some(0.316),
            ..Default::default()
        };
        assert_relative_eq!(get_payout_ratio_from_metrics(&[metrics]).unwrap(), 31.6);
        assert_eq!(get_payout_ratio_from_metrics(&[KeyMetrics::default()]), None);
        assert_eq!(get_payout_ratio_from_metrics(&[]), None);
    }
}
