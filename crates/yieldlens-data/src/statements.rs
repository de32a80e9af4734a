//! Financial statement records.
//!
//! One record per fiscal period, deserialized from the provider's camelCase
//! JSON. Sequences of records are ordered most-recent first, so index 0 is
//! always the latest period. Every figure is optional: a field the provider
//! did not report stays `None` and is never read as zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Income statement for one fiscal period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeStatement {
    /// Period end date
    pub date: Option<NaiveDate>,
    /// Total revenue
    pub revenue: Option<f64>,
    /// Net income
    pub net_income: Option<f64>,
    /// Earnings per share
    pub eps: Option<f64>,
}

/// Balance sheet for one fiscal period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BalanceSheet {
    /// Period end date
    pub date: Option<NaiveDate>,
    /// Total debt
    pub total_debt: Option<f64>,
    /// Total stockholders' equity
    pub total_stockholders_equity: Option<f64>,
    /// Total current assets
    pub total_current_assets: Option<f64>,
    /// Total current liabilities
    pub total_current_liabilities: Option<f64>,
}

/// Cash flow statement for one fiscal period.
///
/// `dividends_paid` is reported as a negative outflow by some providers and
/// as a positive amount by others. Use [`CashFlowStatement::dividends_paid_abs`]
/// when the magnitude is what matters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CashFlowStatement {
    /// Period end date
    pub date: Option<NaiveDate>,
    /// Net income
    pub net_income: Option<f64>,
    /// Depreciation and amortization
    pub depreciation_and_amortization: Option<f64>,
    /// Dividends paid (sign depends on the provider)
    pub dividends_paid: Option<f64>,
    /// Free cash flow
    pub free_cash_flow: Option<f64>,
}

impl CashFlowStatement {
    /// Magnitude of dividends paid, independent of sign convention.
    pub fn dividends_paid_abs(&self) -> Option<f64> {
        self.dividends_paid.map(f64::abs)
    }
}

/// Pre-computed per-period ratios reported by the provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyMetrics {
    /// Period end date
    pub date: Option<NaiveDate>,
    /// Payout ratio as a fraction (0.316 = 31.6%)
    pub payout_ratio: Option<f64>,
    /// Price to earnings ratio
    pub pe_ratio: Option<f64>,
    /// Price to book ratio
    pub pb_ratio: Option<f64>,
    /// Return on equity as a fraction
    pub roe: Option<f64>,
    /// Net profit margin as a fraction
    pub net_profit_margin: Option<f64>,
}
