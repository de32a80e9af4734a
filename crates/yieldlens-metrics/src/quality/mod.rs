//! Quality metrics - balance sheet health and profitability

mod health;
mod profitability;

pub use health::{
    FinancialHealth, HealthThresholds, analyze_financial_health, analyze_financial_health_with,
};
pub use profitability::{
    FULL_MARKS_MARGIN, FULL_MARKS_ROE, QualityScore, calculate_quality_score,
};
