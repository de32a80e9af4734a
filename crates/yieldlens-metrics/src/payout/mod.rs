//! Dividend payout ratios
//!
//! Measures how much of earnings (or FFO for REITs) and free cash flow is
//! paid out as dividends, and whether that level is sustainable.

mod analyzer;
mod ffo;
mod ratios;
mod reit;
mod sustainability;

pub use analyzer::{PayoutAnalysis, PayoutAnalyzer};
pub use ffo::{calculate_ffo, calculate_ffo_payout_ratio};
pub use ratios::{PayoutRatios, calculate_payout_ratios, get_payout_ratio_from_metrics};
pub use reit::{IndustryAwareReitClassifier, ReitClassifier, SectorReitClassifier, is_reit};
pub use sustainability::{
    MAX_SUSTAINABLE_FCF_PAYOUT, MAX_SUSTAINABLE_PAYOUT, analyze_dividend_sustainability,
};
