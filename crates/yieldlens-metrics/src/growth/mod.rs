//! Growth metrics - how dividends and fundamentals develop over time
//!
//! Dividend CAGR and consistency, dividend stability, revenue and EPS CAGR,
//! and multi-year revenue and earnings trends.

mod cagr;
mod dividend;
mod fundamentals;
mod stability;
mod trend;

pub use cagr::calculate_cagr;
pub use dividend::{
    DividendGrowth, DividendGrowthConfig, analyze_dividend_growth, analyze_dividend_growth_with,
};
pub use fundamentals::{GROWTH_WINDOW_YEARS, GrowthMetrics, analyze_growth_metrics};
pub use stability::{
    DividendStability, MIN_STABILITY_YEARS, STABLE_VOLATILITY_PCT, STREAK_CUT_TOLERANCE,
    analyze_dividend_stability, stability_score,
};
pub use trend::{
    MIN_TREND_PERIODS, TREND_LOOKBACK, TrendAnalysis, analyze_earnings_trend,
    analyze_revenue_trend, check_positive_trend, earnings_trend, revenue_trend,
};
