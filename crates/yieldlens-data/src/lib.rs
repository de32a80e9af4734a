#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/yieldlens/yieldlens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod dividends;
pub mod error;
pub mod gics;
pub mod prices;
pub mod profile;
pub mod snapshot;
pub mod statements;

pub use dividends::{DividendPayment, annual_dividend_totals};
pub use error::{DataError, Result};
pub use gics::{GicsSector, UnknownSector, normalize_sector};
pub use prices::{PriceBar, PriceSeries};
pub use profile::{StockProfile, UNKNOWN_SECTOR};
pub use snapshot::{ScreeningSnapshot, SymbolSnapshot, load_snapshot};
pub use statements::{BalanceSheet, CashFlowStatement, IncomeStatement, KeyMetrics};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
