//! Funds From Operations.
//!
//! FFO is the REIT earnings proxy: net income with depreciation and
//! amortization added back. Both come from the cash flow statement.

use yieldlens_data::CashFlowStatement;

/// FFO of the most recent cash flow statement.
///
/// Missing components count as zero. Returns `None` only when there is no
/// statement at all.
pub fn calculate_ffo(cash_flows: &[CashFlowStatement]) -> Option<f64> {
    let latest = cash_flows.first()?;
    Some(
        latest.net_income.unwrap_or(0.0) + latest.depreciation_and_amortization.unwrap_or(0.0),
    )
}

/// Dividends paid as a percentage of FFO, using the most recent statement.
///
/// `None` when FFO is not positive or dividends paid were not reported.
pub fn calculate_ffo_payout_ratio(cash_flows: &[CashFlowStatement]) -> Option<f64> {
    let ffo = calculate_ffo(cash_flows)?;
    let dividends = cash_flows.first()?.dividends_paid_abs()?;
    (ffo > 0.0).then(|| dividends / ffo * 100.0)
}
