//! Composite ranking scores.
//!
//! Scores rank candidates that already qualified; they never gate
//! qualification. Missing inputs earn the lowest bucket of their component.

use crate::candidate::CandidateRecord;

/// Composite score (0-100) for the dividend growth pullback strategy.
///
/// | Component | Points |
/// |---|---|
/// | Dividend CAGR (>= 20 / 15 / 12 / below) | 40 / 35 / 30 / 20 |
/// | Consistent dividend | 5 |
/// | ROE % (>= 20 / 15 / 10 / below) | 12 / 10 / 7 / 3 |
/// | Profit margin % (>= 20 / 15 / 10 / below) | 10 / 8 / 6 / 3 |
/// | Debt-to-equity (< 0.5 / 1.0 / 2.0) | 8 / 6 / 3 |
/// | RSI (<= 25 / 30 / 35 / 40 / above) | 20 / 18 / 15 / 12 / 5 |
/// | P/E (< 15 / 25) | 5 / 3 |
/// | P/B (< 3 / 5) | 5 / 3 |
///
/// The total is capped at 100.
pub fn pullback_composite_score(candidate: &CandidateRecord) -> f64 {
    let dividend_growth = match candidate.dividend_cagr_3y {
        Some(cagr) if cagr >= 20.0 => 40.0,
        Some(cagr) if cagr >= 15.0 => 35.0,
        Some(cagr) if cagr >= 12.0 => 30.0,
        _ => 20.0,
    };
    let consistency = if candidate.dividend_consistent == Some(true) { 5.0 } else { 0.0 };

    let roe = tiered_at_least(candidate.roe, &[(20.0, 12.0), (15.0, 10.0), (10.0, 7.0)], 3.0);
    let margin = tiered_at_least(
        candidate.profit_margin,
        &[(20.0, 10.0), (15.0, 8.0), (10.0, 6.0)],
        3.0,
    );
    let leverage = tiered_below(candidate.debt_to_equity, &[(0.5, 8.0), (1.0, 6.0), (2.0, 3.0)]);

    let technical = match candidate.rsi {
        Some(rsi) if rsi <= 25.0 => 20.0,
        Some(rsi) if rsi <= 30.0 => 18.0,
        Some(rsi) if rsi <= 35.0 => 15.0,
        Some(rsi) if rsi <= 40.0 => 12.0,
        _ => 5.0,
    };

    let valuation = tiered_below(candidate.pe_ratio, &[(15.0, 5.0), (25.0, 3.0)])
        + tiered_below(candidate.pb_ratio, &[(3.0, 5.0), (5.0, 3.0)]);

    (dividend_growth + consistency + roe + margin + leverage + technical + valuation).min(100.0)
}

/// Composite score (0-100) for the value dividend strategy.
///
/// | Component | Points |
/// |---|---|
/// | Dividend CAGR, full at 10% | 15 |
/// | Stability score x 0.2 | 20 |
/// | Revenue CAGR, full at 10% | 10 |
/// | EPS CAGR, full at 15% | 10 |
/// | Sustainable dividend | 10 |
/// | Financially healthy | 10 |
/// | Quality score x 0.25 | 25 |
pub fn value_composite_score(candidate: &CandidateRecord) -> f64 {
    let dividend_growth = scaled(candidate.dividend_cagr_3y, 10.0, 15.0);
    let stability = candidate.stability_score.unwrap_or(0.0).clamp(0.0, 100.0) * 0.2;
    let revenue = scaled(candidate.revenue_cagr_3y, 10.0, 10.0);
    let eps = scaled(candidate.eps_cagr_3y, 15.0, 10.0);
    let sustainable = if candidate.dividend_sustainable == Some(true) { 10.0 } else { 0.0 };
    let healthy = if candidate.financially_healthy == Some(true) { 10.0 } else { 0.0 };
    let quality = candidate.quality_score.unwrap_or(0.0).clamp(0.0, 100.0) * 0.25;

    dividend_growth + stability + revenue + eps + sustainable + healthy + quality
}

/// Linear credit reaching `max_points` at `full_at`, never negative.
fn scaled(value: Option<f64>, full_at: f64, max_points: f64) -> f64 {
    value.map_or(0.0, |v| (v / full_at * max_points).clamp(0.0, max_points))
}

/// Points of the first tier whose floor `value` reaches, else `fallback`.
fn tiered_at_least(value: Option<f64>, tiers: &[(f64, f64)], fallback: f64) -> f64 {
    value
        .and_then(|v| tiers.iter().find(|&&(floor, _)| v >= floor))
        .map_or(fallback, |&(_, points)| points)
}

/// Points of the first tier whose ceiling `value` is strictly under, else 0.
fn tiered_below(value: Option<f64>, tiers: &[(f64, f64)]) -> f64 {
    value
        .and_then(|v| tiers.iter().find(|&&(ceiling, _)| v < ceiling))
        .map_or(0.0, |&(_, points)| points)
}
