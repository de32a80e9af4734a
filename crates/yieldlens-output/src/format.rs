//! Cell formatting for tables and reports.
//!
//! Absent values render as `N/A`, never as zero.

use yieldlens_screen::CandidateRecord;

/// Placeholder for an absent value.
pub const NOT_AVAILABLE: &str = "N/A";

/// RSI at or below this is marked oversold.
const OVERSOLD_MARK: f64 = 40.0;

/// RSI at or below this is marked deeply oversold.
const DEEPLY_OVERSOLD_MARK: f64 = 30.0;

/// Format `value` with `decimals` places, or `N/A`.
pub fn format_optional(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{v:.decimals$}"))
}

/// Format a percentage with `decimals` places and a `%` sign, or `N/A`.
pub fn format_percent(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{v:.decimals$}%"))
}

/// Format a price as dollars, or `N/A`.
pub fn format_price(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("${v:.2}"))
}

/// Format a market capitalization in billions, or `N/A`.
pub fn format_market_cap(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("${:.1}B", v / 1e9))
}

/// Payout ratio for display.
///
/// Earnings payout above 100% is common for REITs and yieldcos because of
/// non-cash charges; the FCF payout ratio is shown instead when known.
pub fn format_payout_ratio(payout_ratio: Option<f64>, fcf_payout_ratio: Option<f64>) -> String {
    let shown = match (payout_ratio, fcf_payout_ratio) {
        (Some(payout), Some(fcf)) if payout > 100.0 => Some(fcf),
        (Some(payout), _) => Some(payout),
        (None, fcf) => fcf,
    };
    format_percent(shown, 0)
}

/// RSI rounded to a whole number, with `*` when oversold and `**` when
/// deeply oversold.
pub fn format_rsi(rsi: Option<f64>) -> String {
    match rsi {
        None => NOT_AVAILABLE.to_string(),
        Some(v) if v <= DEEPLY_OVERSOLD_MARK => format!("{v:.0}**"),
        Some(v) if v <= OVERSOLD_MARK => format!("{v:.0}*"),
        Some(v) => format!("{v:.0}"),
    }
}

/// One-word dividend quality label.
pub fn dividend_badge(candidate: &CandidateRecord) -> &'static str {
    if candidate.dividend_sustainable == Some(true) {
        "Sustainable"
    } else if candidate.dividend_consistent == Some(true) {
        "Consistent"
    } else {
        "Variable"
    }
}
