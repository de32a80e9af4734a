#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/yieldlens/yieldlens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod format;
pub mod report;
pub mod summary;

pub use export::{CANDIDATE_COLUMNS, ExportError, ExportFormat, Exporter};
pub use format::{
    NOT_AVAILABLE, dividend_badge, format_market_cap, format_optional, format_payout_ratio,
    format_percent, format_price, format_rsi,
};
pub use report::{DEFAULT_TITLE, Report, ReportBuilder, ReportError};
pub use summary::{RejectionCount, ScreeningSummary, generate_screening_summaries};
