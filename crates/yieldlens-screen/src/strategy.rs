//! Screening strategies.
//!
//! A strategy is a conjunction of clauses over a [`CandidateRecord`]. Clauses
//! are checked in a fixed order and the first failure becomes the
//! [`Rejection`]. A missing value always fails its clause.

use crate::candidate::CandidateRecord;
use crate::criteria::{GrowthPullbackCriteria, ValueDividendCriteria};
use crate::scoring::{pullback_composite_score, value_composite_score};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A single screening condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Clause {
    /// Three-year dividend CAGR floor
    DividendCagr,
    /// Dividend yield floor
    DividendYield,
    /// RSI ceiling
    Rsi,
    /// Market capitalization floor
    MarketCap,
    /// Revenue growth flag
    RevenueGrowth,
    /// EPS growth flag
    EpsGrowth,
    /// Debt-to-equity ceiling
    DebtToEquity,
    /// Positive P/E ceiling
    PeRatio,
    /// Positive P/B ceiling
    PbRatio,
    /// Dividend volatility ceiling, when enabled
    DividendVolatility,
}

impl Clause {
    /// Candidate field the clause reads.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::DividendCagr => "dividend_cagr_3y",
            Self::DividendYield => "dividend_yield",
            Self::Rsi => "rsi",
            Self::MarketCap => "market_cap",
            Self::RevenueGrowth => "revenue_growth_positive",
            Self::EpsGrowth => "eps_growth_positive",
            Self::DebtToEquity => "debt_to_equity",
            Self::PeRatio => "pe_ratio",
            Self::PbRatio => "pb_ratio",
            Self::DividendVolatility => "dividend_volatility_pct",
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// Why a candidate failed a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// First clause that failed
    pub clause: Clause,
    /// The clause failed because its value was absent
    pub missing: bool,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.missing {
            write!(f, "{} missing", self.clause)
        } else {
            write!(f, "{} out of range", self.clause)
        }
    }
}

/// Identifies one of the built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// [`DividendGrowthPullback`]
    GrowthPullback,
    /// [`ValueDividend`]
    ValueDividend,
}

impl StrategyKind {
    /// Both strategies.
    pub const fn all() -> [Self; 2] {
        [Self::GrowthPullback, Self::ValueDividend]
    }

    /// Machine name, as used in config files and on the command line.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GrowthPullback => "growth-pullback",
            Self::ValueDividend => "value-dividend",
        }
    }

    /// Human readable title.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::GrowthPullback => "Dividend Growth Pullback",
            Self::ValueDividend => "Value Dividend",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A screening rule set with its ranking score.
pub trait ScreeningStrategy {
    /// Threshold set the strategy is parameterised by.
    type Criteria;

    /// Which strategy this is.
    fn kind(&self) -> StrategyKind;

    /// Strategy name.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Current thresholds.
    fn criteria(&self) -> &Self::Criteria;

    /// Build the strategy with custom thresholds.
    fn with_criteria(criteria: Self::Criteria) -> Self
    where
        Self: Sized;

    /// First failing clause, or `None` when the candidate qualifies.
    fn rejection(&self, candidate: &CandidateRecord) -> Option<Rejection>;

    /// Composite ranking score, 0-100.
    fn score(&self, candidate: &CandidateRecord) -> f64;

    /// Whether the candidate passes every clause.
    fn qualifies(&self, candidate: &CandidateRecord) -> bool {
        match self.rejection(candidate) {
            None => true,
            Some(rejection) => {
                debug!(
                    symbol = %candidate.symbol,
                    strategy = self.name(),
                    clause = %rejection.clause,
                    missing = rejection.missing,
                    "candidate rejected"
                );
                false
            }
        }
    }
}

type ClauseResult = Result<(), Rejection>;

fn check(clause: Clause, value: Option<f64>, pass: impl FnOnce(f64) -> bool) -> ClauseResult {
    match value {
        None => Err(Rejection {
            clause,
            missing: true,
        }),
        Some(v) if pass(v) => Ok(()),
        Some(_) => Err(Rejection {
            clause,
            missing: false,
        }),
    }
}

fn check_flag(clause: Clause, flag: Option<bool>) -> ClauseResult {
    check(clause, flag.map(f64::from), |v| v > 0.0)
}

/// Growth years that excuse a volatile dividend.
const STEADY_GROWTH_YEARS: u32 = 3;

fn check_volatility(c: &CandidateRecord, limit: f64) -> ClauseResult {
    let steady_grower = c.dividend_growing == Some(true)
        && c.dividend_years_of_growth.is_some_and(|years| years >= STEADY_GROWTH_YEARS);
    check(Clause::DividendVolatility, c.dividend_volatility_pct, |v| {
        v <= limit || steady_grower
    })
}

/// Dividend growers trading in a pullback.
///
/// Fast dividend growth, a meaningful yield, an oversold RSI, size, growing
/// revenue and EPS, and moderate leverage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DividendGrowthPullback {
    criteria: GrowthPullbackCriteria,
}

impl DividendGrowthPullback {
    fn evaluate(&self, c: &CandidateRecord) -> ClauseResult {
        let t = &self.criteria;
        check(Clause::DividendCagr, c.dividend_cagr_3y, |v| v >= t.min_dividend_cagr)?;
        check(Clause::DividendYield, c.dividend_yield, |v| v >= t.min_dividend_yield)?;
        check(Clause::Rsi, c.rsi, |v| v <= t.max_rsi)?;
        check(Clause::MarketCap, c.market_cap, |v| v >= t.min_market_cap)?;
        check_flag(Clause::RevenueGrowth, c.revenue_growth_positive)?;
        check_flag(Clause::EpsGrowth, c.eps_growth_positive)?;
        check(Clause::DebtToEquity, c.debt_to_equity, |v| v < t.max_debt_to_equity)
    }
}

impl ScreeningStrategy for DividendGrowthPullback {
    type Criteria = GrowthPullbackCriteria;

    fn kind(&self) -> StrategyKind {
        StrategyKind::GrowthPullback
    }

    fn criteria(&self) -> &GrowthPullbackCriteria {
        &self.criteria
    }

    fn with_criteria(criteria: GrowthPullbackCriteria) -> Self {
        Self { criteria }
    }

    fn rejection(&self, candidate: &CandidateRecord) -> Option<Rejection> {
        self.evaluate(candidate).err()
    }

    fn score(&self, candidate: &CandidateRecord) -> f64 {
        pullback_composite_score(candidate)
    }
}

/// Cheap, high-yield dividend payers in a pullback.
///
/// Low positive P/E and P/B, a high yield, an oversold RSI, some dividend
/// growth, and growing revenue and EPS. Optionally drops erratic dividends
/// that are not growing steadily.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ValueDividend {
    criteria: ValueDividendCriteria,
}

impl ValueDividend {
    fn evaluate(&self, c: &CandidateRecord) -> ClauseResult {
        let t = &self.criteria;
        check(Clause::PeRatio, c.pe_ratio, |v| v > 0.0 && v <= t.max_pe_ratio)?;
        check(Clause::PbRatio, c.pb_ratio, |v| v > 0.0 && v <= t.max_pb_ratio)?;
        check(Clause::DividendYield, c.dividend_yield, |v| v >= t.min_dividend_yield)?;
        check(Clause::Rsi, c.rsi, |v| v <= t.max_rsi)?;
        check(Clause::DividendCagr, c.dividend_cagr_3y, |v| v >= t.min_dividend_cagr)?;
        check_flag(Clause::RevenueGrowth, c.revenue_growth_positive)?;
        check_flag(Clause::EpsGrowth, c.eps_growth_positive)?;
        t.max_dividend_volatility
            .map_or(Ok(()), |limit| check_volatility(c, limit))
    }
}

impl ScreeningStrategy for ValueDividend {
    type Criteria = ValueDividendCriteria;

    fn kind(&self) -> StrategyKind {
        StrategyKind::ValueDividend
    }

    fn criteria(&self) -> &ValueDividendCriteria {
        &self.criteria
    }

    fn with_criteria(criteria: ValueDividendCriteria) -> Self {
        Self { criteria }
    }

    fn rejection(&self, candidate: &CandidateRecord) -> Option<Rejection> {
        self.evaluate(candidate).err()
    }

    fn score(&self, candidate: &CandidateRecord) -> f64 {
        value_composite_score(candidate)
    }
}

/// Dividend growth pullback check with the default thresholds.
pub fn qualifies_dividend_growth_pullback(candidate: &CandidateRecord) -> bool {
    DividendGrowthPullback::default().qualifies(candidate)
}

/// Value dividend check with the default thresholds.
pub fn qualifies_value_dividend(candidate: &CandidateRecord) -> bool {
    ValueDividend::default().qualifies(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pullback_candidate() -> CandidateRecord {
        CandidateRecord {
            dividend_cagr_3y: Some(15.0),
            dividend_yield: Some(2.0),
            rsi: Some(35.0),
            market_cap: Some(5e9),
            revenue_growth_positive: Some(true),
            eps_growth_positive: Some(true),
            debt_to_equity: Some(1.5),
            ..CandidateRecord::new("GROW")
        }
    }

    fn value_candidate() -> CandidateRecord {
        CandidateRecord {
            pe_ratio: Some(14.0),
            pb_ratio: Some(1.6),
            dividend_yield: Some(4.2),
            rsi: Some(38.0),
            dividend_cagr_3y: Some(6.0),
            revenue_growth_positive: Some(true),
            eps_growth_positive: Some(true),
            ..CandidateRecord::new("VAL")
        }
    }

    #[test]
    fn test_pullback_qualifies() {
        assert!(qualifies_dividend_growth_pullback(&pullback_candidate()));
        assert_eq!(DividendGrowthPullback::default().rejection(&pullback_candidate()), None);
    }

    #[rstest]
    #[case::cagr_boundary(|c: &mut CandidateRecord| c.dividend_cagr_3y = Some(12.0), true)]
    #[case::cagr_below(|c: &mut CandidateRecord| c.dividend_cagr_3y = Some(11.99), false)]
    #[case::yield_boundary(|c: &mut CandidateRecord| c.dividend_yield = Some(1.5), true)]
    #[case::rsi_boundary(|c: &mut CandidateRecord| c.rsi = Some(40.0), true)]
    #[case::rsi_above(|c: &mut CandidateRecord| c.rsi = Some(40.01), false)]
    #[case::cap_boundary(|c: &mut CandidateRecord| c.market_cap = Some(2e9), true)]
    #[case::debt_boundary(|c: &mut CandidateRecord| c.debt_to_equity = Some(2.0), false)]
    #[case::debt_zero(|c: &mut CandidateRecord| c.debt_to_equity = Some(0.0), true)]
    #[case::revenue_shrinking(|c: &mut CandidateRecord| c.revenue_growth_positive = Some(false), false)]
    fn test_pullback_boundaries(
        #[case] modify: fn(&mut CandidateRecord),
        #[case] expected: bool,
    ) {
        let mut candidate = pullback_candidate();
        modify(&mut candidate);
        assert_eq!(qualifies_dividend_growth_pullback(&candidate), expected);
    }

    #[rstest]
    #[case::cagr(|c: &mut CandidateRecord| c.dividend_cagr_3y = None, Clause::DividendCagr)]
    #[case::rsi(|c: &mut CandidateRecord| c.rsi = None, Clause::Rsi)]
    #[case::eps(|c: &mut CandidateRecord| c.eps_growth_positive = None, Clause::EpsGrowth)]
    #[case::debt(|c: &mut CandidateRecord| c.debt_to_equity = None, Clause::DebtToEquity)]
    fn test_pullback_missing_fails_closed(
        #[case] modify: fn(&mut CandidateRecord),
        #[case] clause: Clause,
    ) {
        let mut candidate = pullback_candidate();
        modify(&mut candidate);
        let rejection = DividendGrowthPullback::default().rejection(&candidate);
        assert_eq!(rejection, Some(Rejection { clause, missing: true }));
    }

    #[test]
    fn test_first_failing_clause_reported() {
        let candidate = CandidateRecord {
            dividend_yield: Some(0.5),
            rsi: Some(70.0),
            ..pullback_candidate()
        };
        let rejection = DividendGrowthPullback::default().rejection(&candidate).unwrap();
        assert_eq!(rejection.clause, Clause::DividendYield);
        assert!(!rejection.missing);
        assert_eq!(rejection.to_string(), "dividend_yield out of range");
    }

    #[test]
    fn test_value_qualifies() {
        assert!(qualifies_value_dividend(&value_candidate()));
        assert!(!qualifies_value_dividend(&pullback_candidate()));
    }

    #[rstest]
    #[case::pe_boundary(|c: &mut CandidateRecord| c.pe_ratio = Some(20.0), true)]
    #[case::pe_negative(|c: &mut CandidateRecord| c.pe_ratio = Some(-8.0), false)]
    #[case::pe_zero(|c: &mut CandidateRecord| c.pe_ratio = Some(0.0), false)]
    #[case::pb_boundary(|c: &mut CandidateRecord| c.pb_ratio = Some(2.0), true)]
    #[case::pb_above(|c: &mut CandidateRecord| c.pb_ratio = Some(2.1), false)]
    #[case::yield_below(|c: &mut CandidateRecord| c.dividend_yield = Some(2.99), false)]
    #[case::cagr_boundary(|c: &mut CandidateRecord| c.dividend_cagr_3y = Some(5.0), true)]
    #[case::pe_missing(|c: &mut CandidateRecord| c.pe_ratio = None, false)]
    #[case::debt_ignored(|c: &mut CandidateRecord| c.debt_to_equity = Some(9.0), true)]
    fn test_value_boundaries(#[case] modify: fn(&mut CandidateRecord), #[case] expected: bool) {
        let mut candidate = value_candidate();
        modify(&mut candidate);
        assert_eq!(qualifies_value_dividend(&candidate), expected);
    }

    #[rstest]
    #[case::disabled(None, Some(140.0), None, None, true)]
    #[case::calm(Some(100.0), Some(100.0), Some(false), Some(0), true)]
    #[case::erratic(Some(100.0), Some(140.0), Some(false), Some(1), false)]
    #[case::steady_grower(Some(100.0), Some(140.0), Some(true), Some(3), true)]
    #[case::short_streak(Some(100.0), Some(140.0), Some(true), Some(2), false)]
    #[case::unknown(Some(100.0), None, None, None, false)]
    fn test_value_dividend_volatility(
        #[case] limit: Option<f64>,
        #[case] volatility: Option<f64>,
        #[case] growing: Option<bool>,
        #[case] years: Option<u32>,
        #[case] expected: bool,
    ) {
        let strategy = ValueDividend::with_criteria(ValueDividendCriteria {
            max_dividend_volatility: limit,
            ..Default::default()
        });
        let candidate = CandidateRecord {
            dividend_volatility_pct: volatility,
            dividend_growing: growing,
            dividend_years_of_growth: years,
            ..value_candidate()
        };
        assert_eq!(strategy.qualifies(&candidate), expected);
        if !expected {
            let rejection = strategy.rejection(&candidate).unwrap();
            assert_eq!(rejection.clause, Clause::DividendVolatility);
            assert_eq!(rejection.missing, volatility.is_none());
        }
    }

    #[test]
    fn test_custom_criteria() {
        let strategy = DividendGrowthPullback::with_criteria(GrowthPullbackCriteria {
            min_dividend_cagr: 20.0,
            ..Default::default()
        });
        assert_eq!(strategy.criteria().min_dividend_cagr, 20.0);
        assert!(!strategy.qualifies(&pullback_candidate()));
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(DividendGrowthPullback::default().name(), "growth-pullback");
        assert_eq!(ValueDividend::default().name(), "value-dividend");
        assert_eq!(StrategyKind::ValueDividend.title(), "Value Dividend");
    }
}
