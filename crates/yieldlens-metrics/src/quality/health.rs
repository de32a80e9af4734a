//! Balance sheet health.

use serde::{Deserialize, Serialize};
use yieldlens_data::BalanceSheet;

/// Thresholds for the financial health flag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthThresholds {
    /// Debt-to-equity must stay strictly below this (default: 2.0)
    pub max_debt_to_equity: f64,
    /// Current ratio must be at least this (default: 1.0)
    pub min_current_ratio: f64,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            max_debt_to_equity: 2.0,
            min_current_ratio: 1.0,
        }
    }
}

/// Leverage and liquidity of the latest balance sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialHealth {
    /// Total debt over stockholders' equity
    pub debt_to_equity: Option<f64>,
    /// Current assets over current liabilities
    pub current_ratio: Option<f64>,
    /// Both ratios defined and within thresholds
    pub financially_healthy: bool,
}

/// Analyze the latest balance sheet with the default thresholds.
pub fn analyze_financial_health(balance_sheets: &[BalanceSheet]) -> FinancialHealth {
    analyze_financial_health_with(balance_sheets, &HealthThresholds::default())
}

/// Analyze the latest balance sheet (index 0).
///
/// Debt-to-equity is undefined for non-positive equity and the current ratio
/// for non-positive current liabilities. A company with either ratio
/// undefined is never flagged healthy.
pub fn analyze_financial_health_with(
    balance_sheets: &[BalanceSheet],
    thresholds: &HealthThresholds,
) -> FinancialHealth {
    let Some(latest) = balance_sheets.first() else {
        return FinancialHealth::default();
    };

    let debt_to_equity = latest
        .total_stockholders_equity
        .filter(|&equity| equity > 0.0)
        .map(|equity| latest.total_debt.unwrap_or(0.0) / equity);
    let current_ratio = latest
        .total_current_liabilities
        .filter(|&liabilities| liabilities > 0.0)
        .map(|liabilities| latest.total_current_assets.unwrap_or(0.0) / liabilities);

    let financially_healthy = match (debt_to_equity, current_ratio) {
        (Some(de), Some(cr)) => {
            de < thresholds.max_debt_to_equity && cr >= thresholds.min_current_ratio
        }
        _ => false,
    };

    FinancialHealth {
        debt_to_equity,
        current_ratio,
        financially_healthy,
    }
}
