#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/yieldlens/yieldlens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod growth;
pub mod momentum;
pub mod payout;
pub mod quality;
pub mod registry;

// Re-export the per-symbol entry points
pub use growth::{
    DividendGrowth, DividendGrowthConfig, DividendStability, GrowthMetrics, TrendAnalysis,
    analyze_dividend_growth, analyze_dividend_growth_with, analyze_dividend_stability,
    analyze_earnings_trend, analyze_growth_metrics, analyze_revenue_trend, calculate_cagr,
    check_positive_trend, earnings_trend, revenue_trend, stability_score,
};
pub use momentum::{RsiConfig, calculate_rsi, is_oversold};
pub use payout::{
    IndustryAwareReitClassifier, PayoutAnalysis, PayoutAnalyzer, PayoutRatios, ReitClassifier,
    SectorReitClassifier, analyze_dividend_sustainability, calculate_ffo,
    calculate_ffo_payout_ratio, calculate_payout_ratios, get_payout_ratio_from_metrics, is_reit,
};
pub use quality::{
    FinancialHealth, HealthThresholds, QualityScore, analyze_financial_health,
    analyze_financial_health_with, calculate_quality_score,
};

// Re-export registry types for convenience
pub use registry::{
    MetricCategory, MetricInfo, available_metrics, get_metric_info, metrics_by_category,
};
