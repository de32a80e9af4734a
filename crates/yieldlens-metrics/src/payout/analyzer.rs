//! Payout analysis for a single symbol.

use super::ratios::{PayoutRatios, calculate_payout_ratios, get_payout_ratio_from_metrics};
use super::reit::{ReitClassifier, SectorReitClassifier};
use serde::{Deserialize, Serialize};
use tracing::debug;
use yieldlens_data::SymbolSnapshot;

/// Result of [`PayoutAnalyzer::analyze`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoutAnalysis {
    /// Whether the classifier treated the symbol as a REIT
    pub is_reit: bool,
    /// Payout ratios in percent
    pub ratios: PayoutRatios,
}

/// Classifies a symbol and computes its payout ratios.
///
/// For non-REITs whose statements do not yield an earnings payout ratio,
/// the provider's pre-computed key-metrics ratio is used instead. REITs
/// never fall back, since that ratio is measured against net income.
#[derive(Debug, Clone, Default)]
pub struct PayoutAnalyzer<C = SectorReitClassifier> {
    classifier: C,
}

impl<C: ReitClassifier> PayoutAnalyzer<C> {
    /// Create an analyzer using `classifier` for REIT detection.
    pub const fn new(classifier: C) -> Self {
        Self { classifier }
    }

    /// The REIT classifier in use.
    pub const fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Analyze one symbol.
    pub fn analyze(&self, snapshot: &SymbolSnapshot) -> PayoutAnalysis {
        let is_reit = self.classifier.classify(&snapshot.profile);
        let mut ratios =
            calculate_payout_ratios(&snapshot.income_statements, &snapshot.cash_flows, is_reit);

        if !is_reit && ratios.payout_ratio.is_none() {
            ratios.payout_ratio = get_payout_ratio_from_metrics(&snapshot.key_metrics);
            if ratios.payout_ratio.is_some() {
                debug!(symbol = snapshot.symbol(), "payout ratio taken from key metrics");
            }
        }

        PayoutAnalysis { is_reit, ratios }
    }
}
