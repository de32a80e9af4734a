//! Dividend sustainability check.

use super::ratios::PayoutRatios;

/// Highest earnings payout ratio (percent) still considered sustainable.
pub const MAX_SUSTAINABLE_PAYOUT: f64 = 80.0;

/// Highest FCF payout ratio (percent) still considered sustainable.
pub const MAX_SUSTAINABLE_FCF_PAYOUT: f64 = 100.0;

/// Whether the dividend looks covered by earnings and free cash flow.
///
/// The earnings payout ratio must be defined and below 80%. When the FCF
/// payout ratio is known it must also be below 100%.
pub fn analyze_dividend_sustainability(ratios: &PayoutRatios) -> bool {
    match (ratios.payout_ratio, ratios.fcf_payout_ratio) {
        (Some(payout), Some(fcf)) => {
            payout < MAX_SUSTAINABLE_PAYOUT && fcf < MAX_SUSTAINABLE_FCF_PAYOUT
        }
        (Some(payout), None) => payout < MAX_SUSTAINABLE_PAYOUT,
        (None, _) => false,
    }
}
