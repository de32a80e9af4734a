#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/yieldlens/yieldlens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod builder;
pub mod candidate;
pub mod config;
pub mod criteria;
pub mod error;
pub mod scoring;
pub mod screener;
pub mod strategy;

// Re-export main types
pub use builder::CandidateBuilder;
pub use candidate::{CandidateRecord, load_candidates, parse_candidates};
pub use config::{DEFAULT_TOP_N, ReitDetection, ScreeningConfig};
pub use criteria::{GrowthPullbackCriteria, ValueDividendCriteria};
pub use error::{Result, ScreenError};
pub use scoring::{pullback_composite_score, value_composite_score};
pub use screener::{ScoredCandidate, Screener, ScreeningResults, StrategyResults};
pub use strategy::{
    Clause, DividendGrowthPullback, Rejection, ScreeningStrategy, StrategyKind, ValueDividend,
    qualifies_dividend_growth_pullback, qualifies_value_dividend,
};
