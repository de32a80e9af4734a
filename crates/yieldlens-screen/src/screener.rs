//! Screening runs.
//!
//! Evaluates every candidate against each enabled strategy, scores the ones
//! that qualify and ranks them.

use crate::candidate::CandidateRecord;
use crate::config::ScreeningConfig;
use crate::strategy::{
    Clause, DividendGrowthPullback, ScreeningStrategy, StrategyKind, ValueDividend,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};
use yieldlens_data::normalize_sector;

/// A qualified candidate with its composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// Composite score, 0-100
    pub score: f64,
    /// The candidate
    pub candidate: CandidateRecord,
}

/// Outcome of one strategy over a candidate set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyResults {
    /// Strategy that produced these results
    pub strategy: StrategyKind,
    /// Number of candidates evaluated
    pub evaluated: usize,
    /// Number of candidates that qualified, before truncation
    pub qualified_count: usize,
    /// Highest scoring qualified candidates, best first
    pub qualified: Vec<ScoredCandidate>,
    /// Rejections by first failing clause
    pub rejections: BTreeMap<Clause, usize>,
    /// Rejections caused by a missing value, by clause
    pub missing: BTreeMap<Clause, usize>,
    /// Qualified candidates per normalized sector, before truncation
    pub sectors: BTreeMap<String, usize>,
}

/// Results of a screening run, one entry per enabled strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreeningResults {
    /// Per-strategy results in run order
    pub strategies: Vec<StrategyResults>,
}

impl ScreeningResults {
    /// Results for `strategy`, if it was run.
    pub fn get(&self, strategy: StrategyKind) -> Option<&StrategyResults> {
        self.strategies.iter().find(|r| r.strategy == strategy)
    }

    /// Total qualified across strategies (a symbol can count twice).
    pub fn total_qualified(&self) -> usize {
        self.strategies.iter().map(|r| r.qualified_count).sum()
    }
}

/// Runs the enabled strategies over candidate records.
#[derive(Debug, Clone)]
pub struct Screener {
    growth_pullback: Option<DividendGrowthPullback>,
    value_dividend: Option<ValueDividend>,
    top_n: usize,
}

impl Default for Screener {
    fn default() -> Self {
        Self::new(&ScreeningConfig::default())
    }
}

impl Screener {
    /// Create a screener from a configuration.
    pub fn new(config: &ScreeningConfig) -> Self {
        let enabled = |kind: StrategyKind| config.strategies.contains(&kind);
        Self {
            growth_pullback: enabled(StrategyKind::GrowthPullback)
                .then(|| DividendGrowthPullback::with_criteria(config.growth_pullback)),
            value_dividend: enabled(StrategyKind::ValueDividend)
                .then(|| ValueDividend::with_criteria(config.value_dividend)),
            top_n: config.top_n,
        }
    }

    /// Screen `candidates` with every enabled strategy.
    pub fn run(&self, candidates: &[CandidateRecord]) -> ScreeningResults {
        let mut strategies = Vec::new();
        if let Some(strategy) = &self.growth_pullback {
            strategies.push(evaluate(strategy, candidates, self.top_n));
        }
        if let Some(strategy) = &self.value_dividend {
            strategies.push(evaluate(strategy, candidates, self.top_n));
        }
        ScreeningResults { strategies }
    }
}

fn evaluate<S: ScreeningStrategy>(
    strategy: &S,
    candidates: &[CandidateRecord],
    top_n: usize,
) -> StrategyResults {
    let mut qualified = Vec::new();
    let mut rejections = BTreeMap::new();
    let mut missing = BTreeMap::new();
    let mut sectors = BTreeMap::new();

    for candidate in candidates {
        match strategy.rejection(candidate) {
            None => {
                *sectors
                    .entry(normalize_sector(&candidate.sector).into_owned())
                    .or_insert(0) += 1;
                qualified.push(ScoredCandidate {
                    score: strategy.score(candidate),
                    candidate: candidate.clone(),
                });
            }
            Some(rejection) => {
                debug!(
                    symbol = %candidate.symbol,
                    strategy = strategy.name(),
                    %rejection,
                    "candidate rejected"
                );
                *rejections.entry(rejection.clause).or_insert(0) += 1;
                if rejection.missing {
                    *missing.entry(rejection.clause).or_insert(0) += 1;
                }
            }
        }
    }

    qualified.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.candidate.symbol.cmp(&b.candidate.symbol))
    });
    let qualified_count = qualified.len();
    qualified.truncate(top_n);

    info!(
        strategy = strategy.name(),
        evaluated = candidates.len(),
        qualified = qualified_count,
        "screening complete"
    );

    StrategyResults {
        strategy: strategy.kind(),
        evaluated: candidates.len(),
        qualified_count,
        qualified,
        rejections,
        missing,
        sectors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pullback(symbol: &str, cagr: f64, rsi: f64) -> CandidateRecord {
        CandidateRecord {
            sector: "Industrials".to_string(),
            dividend_cagr_3y: Some(cagr),
            dividend_yield: Some(2.0),
            rsi: Some(rsi),
            market_cap: Some(5e9),
            revenue_growth_positive: Some(true),
            eps_growth_positive: Some(true),
            debt_to_equity: Some(1.5),
            ..CandidateRecord::new(symbol)
        }
    }

    #[test]
    fn test_ranks_by_score_then_symbol() {
        let candidates = vec![
            pullback("BBB", 13.0, 38.0),
            pullback("AAA", 13.0, 38.0),
            pullback("TOP", 22.0, 24.0),
            pullback("OUT", 13.0, 55.0),
        ];
        let screener = Screener::new(
            &ScreeningConfig::default().with_strategy(StrategyKind::GrowthPullback),
        );
        let results = screener.run(&candidates);
        let pullback = results.get(StrategyKind::GrowthPullback).unwrap();

        let symbols: Vec<_> =
            pullback.qualified.iter().map(|s| s.candidate.symbol.as_str()).collect();
        assert_eq!(symbols, ["TOP", "AAA", "BBB"]);
        assert_eq!(pullback.evaluated, 4);
        assert_eq!(pullback.qualified_count, 3);
        assert_eq!(pullback.rejections.get(&Clause::Rsi), Some(&1));
        assert!(pullback.missing.is_empty());
        assert_eq!(pullback.sectors.get("Industrials"), Some(&3));
        assert!(results.get(StrategyKind::ValueDividend).is_none());
    }

    #[test]
    fn test_sector_counts_merge_provider_labels() {
        let sectors = ["Technology", "Information Technology", "Healthcare", ""];
        let candidates: Vec<_> = sectors
            .iter()
            .enumerate()
            .map(|(i, sector)| CandidateRecord {
                sector: (*sector).to_string(),
                ..pullback(&format!("S{i}"), 15.0, 35.0)
            })
            .collect();
        let results = Screener::new(
            &ScreeningConfig::default().with_strategy(StrategyKind::GrowthPullback),
        )
        .run(&candidates);
        let pullback = results.get(StrategyKind::GrowthPullback).unwrap();

        assert_eq!(pullback.sectors.get("Information Technology"), Some(&2));
        assert_eq!(pullback.sectors.get("Health Care"), Some(&1));
        assert_eq!(pullback.sectors.get("Unknown"), Some(&1));
        assert!(!pullback.sectors.contains_key("Technology"));
        // the record itself keeps the provider label
        assert_eq!(pullback.qualified[0].candidate.sector, "Technology");
    }

    #[test]
    fn test_top_n_truncates_after_counting() {
        let candidates: Vec<_> = (0..5)
            .map(|i| pullback(&format!("S{i}"), 12.0 + f64::from(i) * 2.0, 35.0))
            .collect();
        let config = ScreeningConfig::default().with_top_n(2);
        let results = Screener::new(&config).run(&candidates);
        let pullback = results.get(StrategyKind::GrowthPullback).unwrap();

        assert_eq!(pullback.qualified.len(), 2);
        assert_eq!(pullback.qualified_count, 5);
        assert_eq!(pullback.qualified[0].candidate.symbol, "S4");
    }

    #[test]
    fn test_missing_values_counted() {
        let mut candidate = pullback("NIL", 15.0, 35.0);
        candidate.debt_to_equity = None;
        candidate.pe_ratio = None;

        let results = Screener::default().run(&[candidate]);
        assert_eq!(results.strategies.len(), 2);
        assert_eq!(results.total_qualified(), 0);

        let pullback = results.get(StrategyKind::GrowthPullback).unwrap();
        assert_eq!(pullback.missing.get(&Clause::DebtToEquity), Some(&1));

        let value = results.get(StrategyKind::ValueDividend).unwrap();
        assert_eq!(value.missing.get(&Clause::PeRatio), Some(&1));
    }

    #[test]
    fn test_empty_input() {
        let results = Screener::default().run(&[]);
        for strategy in &results.strategies {
            assert_eq!(strategy.evaluated, 0);
            assert!(strategy.qualified.is_empty());
        }
    }
}
