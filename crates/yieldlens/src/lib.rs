#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/yieldlens/yieldlens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export main types from sub-crates
pub use yieldlens_data as data;
pub use yieldlens_metrics as metrics;
pub use yieldlens_output as output;
pub use yieldlens_screen as screen;

// Re-export the types most callers start from
pub use yieldlens_data::{ScreeningSnapshot, SymbolSnapshot, load_snapshot};
pub use yieldlens_screen::{
    CandidateBuilder, CandidateRecord, ScreeningConfig, ScreeningResults, Screener, StrategyKind,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
