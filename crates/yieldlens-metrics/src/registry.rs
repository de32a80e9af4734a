//! Metric Registry
//!
//! Central catalogue of every metric the screener computes, with the input
//! fields each one reads. Used for listing and lookup by name.

use std::collections::HashMap;
use std::fmt;

/// Available metric categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricCategory {
    /// Price momentum (RSI)
    Momentum,
    /// Dividend payout ratios and sustainability
    Payout,
    /// Dividend and fundamental growth
    Growth,
    /// Balance sheet health and profitability
    Quality,
}

impl MetricCategory {
    /// All categories in display order.
    pub const fn all() -> [Self; 4] {
        [Self::Momentum, Self::Payout, Self::Growth, Self::Quality]
    }

    /// Lowercase category name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Momentum => "momentum",
            Self::Payout => "payout",
            Self::Growth => "growth",
            Self::Quality => "quality",
        }
    }

    /// Parse a category from its name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Metric metadata
#[derive(Debug, Clone)]
pub struct MetricInfo {
    /// Metric name (unique identifier, matches the candidate field)
    pub name: &'static str,
    /// Metric category
    pub category: MetricCategory,
    /// Brief description of what the metric measures
    pub description: &'static str,
    /// Input fields the metric reads
    pub required_fields: &'static [&'static str],
}

/// Get all available metric info
pub fn available_metrics() -> Vec<MetricInfo> {
    vec![
        // Momentum
        MetricInfo {
            name: "rsi",
            category: MetricCategory::Momentum,
            description: "14-day Wilder RSI; oversold at 40 or below",
            required_fields: &["prices.close"],
        },
        // Payout
        MetricInfo {
            name: "payout_ratio",
            category: MetricCategory::Payout,
            description: "Dividends paid over net income (over FFO for REITs)",
            required_fields: &["cashFlows.dividendsPaid", "incomeStatements.netIncome"],
        },
        MetricInfo {
            name: "fcf_payout_ratio",
            category: MetricCategory::Payout,
            description: "Dividends paid over free cash flow",
            required_fields: &["cashFlows.dividendsPaid", "cashFlows.freeCashFlow"],
        },
        MetricInfo {
            name: "ffo_payout_ratio",
            category: MetricCategory::Payout,
            description: "Dividends paid over net income plus depreciation and amortization",
            required_fields: &[
                "cashFlows.dividendsPaid",
                "cashFlows.netIncome",
                "cashFlows.depreciationAndAmortization",
            ],
        },
        MetricInfo {
            name: "dividend_sustainable",
            category: MetricCategory::Payout,
            description: "Payout ratio below 80% and FCF payout ratio below 100%",
            required_fields: &["cashFlows.dividendsPaid", "incomeStatements.netIncome"],
        },
        // Growth
        MetricInfo {
            name: "dividend_cagr_3y",
            category: MetricCategory::Growth,
            description: "Three-year CAGR of annual dividend totals",
            required_fields: &["dividends.date", "dividends.dividend"],
        },
        MetricInfo {
            name: "dividend_consistent",
            category: MetricCategory::Growth,
            description: "No year-over-year dividend cut in the history",
            required_fields: &["dividends.date", "dividends.dividend"],
        },
        MetricInfo {
            name: "stability_score",
            category: MetricCategory::Growth,
            description: "Dividend volatility and growth streak score (0-100)",
            required_fields: &["dividends.date", "dividends.dividend"],
        },
        MetricInfo {
            name: "revenue_cagr_3y",
            category: MetricCategory::Growth,
            description: "Three-year revenue CAGR",
            required_fields: &["incomeStatements.revenue"],
        },
        MetricInfo {
            name: "eps_cagr_3y",
            category: MetricCategory::Growth,
            description: "Three-year earnings per share CAGR",
            required_fields: &["incomeStatements.eps"],
        },
        // Quality
        MetricInfo {
            name: "debt_to_equity",
            category: MetricCategory::Quality,
            description: "Total debt over stockholders' equity",
            required_fields: &[
                "balanceSheets.totalDebt",
                "balanceSheets.totalStockholdersEquity",
            ],
        },
        MetricInfo {
            name: "current_ratio",
            category: MetricCategory::Quality,
            description: "Current assets over current liabilities",
            required_fields: &[
                "balanceSheets.totalCurrentAssets",
                "balanceSheets.totalCurrentLiabilities",
            ],
        },
        MetricInfo {
            name: "quality_score",
            category: MetricCategory::Quality,
            description: "ROE and net margin score (0-100)",
            required_fields: &[
                "keyMetrics.roe",
                "incomeStatements.revenue",
                "incomeStatements.netIncome",
            ],
        },
    ]
}

/// Get metrics by category
pub fn metrics_by_category(category: MetricCategory) -> Vec<MetricInfo> {
    available_metrics()
        .into_iter()
        .filter(|m| m.category == category)
        .collect()
}

/// Get metric info by name
pub fn get_metric_info(name: &str) -> Option<MetricInfo> {
    available_metrics().into_iter().find(|m| m.name == name)
}

/// Count metrics by category
pub fn count_by_category() -> HashMap<MetricCategory, usize> {
    let mut counts = HashMap::new();
    for metric in available_metrics() {
        *counts.entry(metric.category).or_insert(0) += 1;
    }
    counts
}
