//! Payout ratio scenarios across the public API

use approx::assert_relative_eq;
use yieldlens_data::{CashFlowStatement, IncomeStatement, StockProfile, SymbolSnapshot};
use yieldlens_metrics::{
    PayoutAnalyzer, SectorReitClassifier, analyze_dividend_sustainability,
    calculate_ffo_payout_ratio, calculate_payout_ratios, is_reit,
};

fn consumer_staples() -> (Vec<IncomeStatement>, Vec<CashFlowStatement>) {
    let income = vec![IncomeStatement {
        net_income: Some(2_486_000_000.0),
        ..Default::default()
    }];
    let cash_flows = vec![CashFlowStatement {
        net_income: Some(2_486_000_000.0),
        dividends_paid: Some(-786_000_000.0),
        free_cash_flow: Some(2_298_000_000.0),
        ..Default::default()
    }];
    (income, cash_flows)
}

#[test]
fn test_non_reit_payout_is_sustainable() {
    let (income, cash_flows) = consumer_staples();
    let ratios = calculate_payout_ratios(&income, &cash_flows, false);

    assert_relative_eq!(ratios.payout_ratio.unwrap(), 31.6, epsilon = 0.5);
    assert_relative_eq!(ratios.fcf_payout_ratio.unwrap(), 34.2, epsilon = 0.5);
    assert!(analyze_dividend_sustainability(&ratios));
}

#[test]
fn test_dividend_sign_does_not_matter() {
    let (income, mut cash_flows) = consumer_staples();
    let outflow = calculate_payout_ratios(&income, &cash_flows, false);

    cash_flows[0].dividends_paid = Some(786_000_000.0);
    let inflow = calculate_payout_ratios(&income, &cash_flows, false);

    assert_eq!(outflow, inflow);
}

#[test]
fn test_empty_statements_have_no_ratios() {
    let ratios = calculate_payout_ratios(&[], &[], false);
    assert!(ratios.payout_ratio.is_none());
    assert!(ratios.fcf_payout_ratio.is_none());
    assert!(!analyze_dividend_sustainability(&ratios));
}

#[test]
fn test_reit_payout_measured_against_ffo() {
    let cash_flows = vec![CashFlowStatement {
        net_income: Some(814_000_000.0),
        depreciation_and_amortization: Some(2_009_000_000.0),
        dividends_paid: Some(-1_643_000_000.0),
        free_cash_flow: Some(3_700_000_000.0),
        ..Default::default()
    }];
    assert_relative_eq!(calculate_ffo_payout_ratio(&cash_flows).unwrap(), 58.2, epsilon = 0.5);

    let snapshot = SymbolSnapshot {
        profile: StockProfile::new("AMT")
            .with_sector("Real Estate")
            .with_industry("REIT - Specialty"),
        cash_flows,
        ..Default::default()
    };
    assert!(is_reit(&snapshot.profile));

    let analysis = PayoutAnalyzer::new(SectorReitClassifier).analyze(&snapshot);
    assert!(analysis.is_reit);
    assert_relative_eq!(analysis.ratios.payout_ratio.unwrap(), 58.2, epsilon = 0.5);
    assert!(analyze_dividend_sustainability(&analysis.ratios));
}
