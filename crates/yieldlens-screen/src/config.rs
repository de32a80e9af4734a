//! Screening configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty file (or no
//! file) screens with the standard thresholds.
//!
//! ```toml
//! strategies = ["growth-pullback"]
//! top_n = 10
//! reit_detection = "sector-or-industry"
//!
//! [growth_pullback]
//! min_dividend_cagr = 10.0
//! ```

use crate::criteria::{GrowthPullbackCriteria, ValueDividendCriteria};
use crate::error::Result;
use crate::strategy::StrategyKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use yieldlens_data::StockProfile;
use yieldlens_metrics::momentum::DEFAULT_RSI_PERIOD;
use yieldlens_metrics::{
    DividendGrowthConfig, HealthThresholds, IndustryAwareReitClassifier, ReitClassifier,
    SectorReitClassifier,
};

/// Number of ranked candidates kept per strategy by default.
pub const DEFAULT_TOP_N: usize = 20;

/// Rule used to decide which symbols are REITs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReitDetection {
    /// Sector is exactly "Real Estate"
    #[default]
    Sector,
    /// Sector mentions real estate or industry mentions REIT
    SectorOrIndustry,
}

impl ReitClassifier for ReitDetection {
    fn classify(&self, profile: &StockProfile) -> bool {
        match self {
            Self::Sector => SectorReitClassifier.classify(profile),
            Self::SectorOrIndustry => IndustryAwareReitClassifier.classify(profile),
        }
    }
}

/// Configuration for a screening run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreeningConfig {
    /// Strategies to run (default: both)
    pub strategies: Vec<StrategyKind>,
    /// Ranked candidates kept per strategy (default: 20)
    pub top_n: usize,
    /// RSI lookback period (default: 14)
    pub rsi_period: usize,
    /// REIT detection rule (default: sector)
    pub reit_detection: ReitDetection,
    /// Dividend growth analysis settings
    pub dividend_growth: DividendGrowthConfig,
    /// Financial health thresholds
    pub health: HealthThresholds,
    /// Dividend growth pullback thresholds
    pub growth_pullback: GrowthPullbackCriteria,
    /// Value dividend thresholds
    pub value_dividend: ValueDividendCriteria,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            strategies: StrategyKind::all().to_vec(),
            top_n: DEFAULT_TOP_N,
            rsi_period: DEFAULT_RSI_PERIOD,
            reit_detection: ReitDetection::default(),
            dividend_growth: DividendGrowthConfig::default(),
            health: HealthThresholds::default(),
            growth_pullback: GrowthPullbackCriteria::default(),
            value_dividend: ValueDividendCriteria::default(),
        }
    }
}

impl ScreeningConfig {
    /// Parse a configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ScreenError::Config`] for invalid TOML or values.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// Read a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ScreenError::Io`] when the file cannot be read,
    /// otherwise the errors of [`ScreeningConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Render the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ScreenError::ConfigSerialization`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Keep only `strategy`.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategies = vec![strategy];
        self
    }

    /// Set how many ranked candidates are kept per strategy.
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}
