//! REIT detection.
//!
//! REITs distribute most of their cash and carry large non-cash depreciation,
//! so their payout is measured against FFO instead of net income. Which
//! securities count as REITs is a heuristic; it sits behind
//! [`ReitClassifier`] so a better rule can be swapped in without touching
//! the payout calculation.

use yieldlens_data::{GicsSector, StockProfile};

/// Decides whether a security should be treated as a REIT.
pub trait ReitClassifier {
    /// `true` when `profile` describes a REIT.
    fn classify(&self, profile: &StockProfile) -> bool;
}

/// Sector-only rule: REIT iff the sector label is exactly `"Real Estate"`.
///
/// Case-sensitive and ignores the industry label, so a REIT filed under
/// another sector is missed and a non-REIT real-estate developer is caught.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectorReitClassifier;

impl ReitClassifier for SectorReitClassifier {
    fn classify(&self, profile: &StockProfile) -> bool {
        profile.sector.as_deref() == Some(GicsSector::RealEstate.name())
    }
}

/// Broader rule: sector contains "real estate" or industry contains "reit",
/// both case-insensitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndustryAwareReitClassifier;

impl ReitClassifier for IndustryAwareReitClassifier {
    fn classify(&self, profile: &StockProfile) -> bool {
        let contains = |field: &Option<String>, needle: &str| {
            field
                .as_deref()
                .is_some_and(|value| value.to_lowercase().contains(needle))
        };
        contains(&profile.sector, "real estate") || contains(&profile.industry, "reit")
    }
}

/// Sector-only REIT test, see [`SectorReitClassifier`].
pub fn is_reit(profile: &StockProfile) -> bool {
    SectorReitClassifier.classify(profile)
}
