//! Sector labels.
//!
//! Providers disagree on sector labels: some report the GICS names
//! ("Information Technology"), others their own ("Technology",
//! "Financial Services"). [`GicsSector::from_provider_name`] maps both, and
//! [`normalize_sector`] turns any label into the one used for grouping.

use crate::profile::UNKNOWN_SECTOR;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// The eleven GICS level 1 sectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum GicsSector {
    /// Energy
    Energy,
    /// Materials
    Materials,
    /// Industrials
    Industrials,
    /// Consumer Discretionary
    ConsumerDiscretionary,
    /// Consumer Staples
    ConsumerStaples,
    /// Health Care
    HealthCare,
    /// Financials
    Financials,
    /// Information Technology
    InformationTechnology,
    /// Communication Services
    CommunicationServices,
    /// Utilities
    Utilities,
    /// Real Estate
    RealEstate,
}

/// Error returned when a label is not a GICS sector name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSector(pub String);

impl fmt::Display for UnknownSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown GICS sector: {}", self.0)
    }
}

impl std::error::Error for UnknownSector {}

impl GicsSector {
    /// Every sector, in GICS code order.
    pub const ALL: [Self; 11] = [
        Self::Energy,
        Self::Materials,
        Self::Industrials,
        Self::ConsumerDiscretionary,
        Self::ConsumerStaples,
        Self::HealthCare,
        Self::Financials,
        Self::InformationTechnology,
        Self::CommunicationServices,
        Self::Utilities,
        Self::RealEstate,
    ];

    /// GICS sector name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Materials => "Materials",
            Self::Industrials => "Industrials",
            Self::ConsumerDiscretionary => "Consumer Discretionary",
            Self::ConsumerStaples => "Consumer Staples",
            Self::HealthCare => "Health Care",
            Self::Financials => "Financials",
            Self::InformationTechnology => "Information Technology",
            Self::CommunicationServices => "Communication Services",
            Self::Utilities => "Utilities",
            Self::RealEstate => "Real Estate",
        }
    }

    /// Map a provider sector label onto a GICS sector.
    ///
    /// Accepts the GICS names and the provider aliases below, ignoring case
    /// and surrounding whitespace.
    pub fn from_provider_name(label: &str) -> Option<Self> {
        let label = label.trim();
        if let Some(sector) = Self::ALL
            .into_iter()
            .find(|sector| sector.name().eq_ignore_ascii_case(label))
        {
            return Some(sector);
        }
        PROVIDER_ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(label))
            .map(|&(_, sector)| sector)
    }
}

const PROVIDER_ALIASES: [(&str, GicsSector); 9] = [
    ("Technology", GicsSector::InformationTechnology),
    ("Healthcare", GicsSector::HealthCare),
    ("Financial Services", GicsSector::Financials),
    ("Financial", GicsSector::Financials),
    ("Consumer Cyclical", GicsSector::ConsumerDiscretionary),
    ("Consumer Defensive", GicsSector::ConsumerStaples),
    ("Basic Materials", GicsSector::Materials),
    ("Communication", GicsSector::CommunicationServices),
    ("Telecommunication Services", GicsSector::CommunicationServices),
];

/// Grouping label for a provider sector.
///
/// Known labels become their GICS name, blanks become `"Unknown"`, and
/// anything else is kept trimmed.
pub fn normalize_sector(label: &str) -> Cow<'_, str> {
    match GicsSector::from_provider_name(label) {
        Some(sector) => Cow::Borrowed(sector.name()),
        None if label.trim().is_empty() => Cow::Borrowed(UNKNOWN_SECTOR),
        None => Cow::Borrowed(label.trim()),
    }
}

impl FromStr for GicsSector {
    type Err = UnknownSector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sector| sector.name() == s)
            .ok_or_else(|| UnknownSector(s.to_string()))
    }
}

impl TryFrom<String> for GicsSector {
    type Error = UnknownSector;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_provider_name(&value).ok_or(UnknownSector(value))
    }
}

impl From<GicsSector> for &'static str {
    fn from(sector: GicsSector) -> Self {
        sector.name()
    }
}

impl fmt::Display for GicsSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
