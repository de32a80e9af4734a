//! Candidate assembly from a symbol snapshot.

use crate::candidate::CandidateRecord;
use crate::config::{ReitDetection, ScreeningConfig};
use tracing::debug;
use yieldlens_data::{SymbolSnapshot, annual_dividend_totals};
use yieldlens_metrics::growth::MIN_STABILITY_YEARS;
use yieldlens_metrics::{
    DividendGrowthConfig, HealthThresholds, PayoutAnalyzer, ReitClassifier, RsiConfig,
    SectorReitClassifier, analyze_dividend_growth_with, analyze_dividend_stability,
    analyze_dividend_sustainability, analyze_financial_health_with, analyze_growth_metrics,
    calculate_quality_score, earnings_trend, revenue_trend, stability_score,
};

/// Computes every metric for a symbol and flattens them into a
/// [`CandidateRecord`].
#[derive(Debug, Clone)]
pub struct CandidateBuilder<C = SectorReitClassifier> {
    payout: PayoutAnalyzer<C>,
    rsi: RsiConfig,
    dividend_growth: DividendGrowthConfig,
    health: HealthThresholds,
}

impl CandidateBuilder<ReitDetection> {
    /// Builder configured from a screening configuration.
    pub fn from_config(config: &ScreeningConfig) -> Self {
        Self::new(config.reit_detection)
            .with_rsi_config(RsiConfig {
                period: config.rsi_period,
                ..Default::default()
            })
            .with_dividend_growth(config.dividend_growth)
            .with_health_thresholds(config.health)
    }
}

impl<C: ReitClassifier> CandidateBuilder<C> {
    /// Create a builder with default settings and the given REIT classifier.
    pub fn new(classifier: C) -> Self {
        Self {
            payout: PayoutAnalyzer::new(classifier),
            rsi: RsiConfig::default(),
            dividend_growth: DividendGrowthConfig::default(),
            health: HealthThresholds::default(),
        }
    }

    /// Set the RSI configuration.
    pub const fn with_rsi_config(mut self, rsi: RsiConfig) -> Self {
        self.rsi = rsi;
        self
    }

    /// Set the dividend growth configuration.
    pub const fn with_dividend_growth(mut self, config: DividendGrowthConfig) -> Self {
        self.dividend_growth = config;
        self
    }

    /// Set the financial health thresholds.
    pub const fn with_health_thresholds(mut self, thresholds: HealthThresholds) -> Self {
        self.health = thresholds;
        self
    }

    /// Build the candidate record for one symbol.
    ///
    /// Metrics that cannot be computed from the snapshot stay `None`.
    pub fn build(&self, snapshot: &SymbolSnapshot) -> CandidateRecord {
        let profile = &snapshot.profile;
        let price = snapshot.current_price();

        let rsi = self.rsi.calculate(snapshot.price_series().closes());
        if rsi.is_none() {
            debug!(
                symbol = snapshot.symbol(),
                bars = snapshot.prices.len(),
                period = self.rsi.period,
                "not enough prices for RSI"
            );
        }

        let has_dividends = !snapshot.dividends.is_empty();
        let dividends = analyze_dividend_growth_with(&snapshot.dividends, &self.dividend_growth);
        let dividend_yield = match (dividends.latest_annual_dividend, price) {
            (Some(annual), Some(price)) if price > 0.0 => Some(annual / price * 100.0),
            _ => None,
        };
        let stability = (annual_dividend_totals(&snapshot.dividends).len()
            >= MIN_STABILITY_YEARS)
            .then(|| analyze_dividend_stability(&snapshot.dividends));

        let growth = analyze_growth_metrics(&snapshot.income_statements);
        let revenue = revenue_trend(&snapshot.income_statements);
        let earnings = earnings_trend(&snapshot.income_statements);

        let payout = self.payout.analyze(snapshot);
        let has_payout = payout.ratios.payout_ratio.is_some()
            || payout.ratios.fcf_payout_ratio.is_some();

        let health = analyze_financial_health_with(&snapshot.balance_sheets, &self.health);
        let has_balance_sheet = !snapshot.balance_sheets.is_empty();

        let quality =
            calculate_quality_score(&snapshot.key_metrics, &snapshot.income_statements);
        let has_quality = quality.roe.is_some() || quality.profit_margin.is_some();

        let latest_metrics = snapshot.key_metrics.first();

        CandidateRecord {
            symbol: snapshot.symbol().to_string(),
            company_name: profile.company_name.clone(),
            sector: profile.sector_or_unknown().to_string(),
            price,
            market_cap: profile.market_cap,
            dividend_yield,
            annual_dividend: dividends.latest_annual_dividend,
            dividend_cagr_3y: dividends.cagr,
            dividend_consistent: has_dividends.then_some(dividends.is_consistent),
            rsi,
            pe_ratio: latest_metrics.and_then(|m| m.pe_ratio),
            pb_ratio: latest_metrics.and_then(|m| m.pb_ratio),
            revenue_cagr_3y: growth.revenue_cagr_3y,
            eps_cagr_3y: growth.eps_cagr_3y,
            revenue_growth_positive: growth.revenue_growth_positive(),
            eps_growth_positive: growth.eps_growth_positive(),
            payout_ratio: payout.ratios.payout_ratio,
            fcf_payout_ratio: payout.ratios.fcf_payout_ratio,
            is_reit: payout.is_reit,
            dividend_sustainable: has_payout
                .then(|| analyze_dividend_sustainability(&payout.ratios)),
            debt_to_equity: health.debt_to_equity,
            current_ratio: health.current_ratio,
            financially_healthy: has_balance_sheet.then_some(health.financially_healthy),
            roe: quality.roe,
            profit_margin: quality.profit_margin,
            quality_score: has_quality.then_some(quality.score),
            stability_score: stability.as_ref().map(stability_score),
            revenue_uptrend: revenue.map(|t| t.is_uptrend),
            revenue_years_of_growth: revenue.map(|t| t.years_of_growth),
            earnings_uptrend: earnings.map(|t| t.is_uptrend),
            earnings_years_of_growth: earnings.map(|t| t.years_of_growth),
            dividend_stable: stability.map(|s| s.is_stable),
            dividend_growing: stability.map(|s| s.is_growing),
            dividend_volatility_pct: stability.and_then(|s| s.volatility_pct),
            dividend_years_of_growth: stability.map(|s| s.years_of_growth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use yieldlens_data::{
        BalanceSheet, CashFlowStatement, DividendPayment, IncomeStatement, KeyMetrics, PriceBar,
        StockProfile,
    };

    fn falling_prices(days: u32) -> Vec<PriceBar> {
        // newest first, price rising the further back we go
        (0..days)
            .map(|i| PriceBar {
                date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap() - chrono::Days::new(i.into()),
                close: 100.0 + f64::from(i) * 0.5 + if i % 3 == 0 { 0.8 } else { 0.0 },
            })
            .collect()
    }

    fn dividends() -> Vec<DividendPayment> {
        [(2021, 1.00), (2022, 1.15), (2023, 1.32), (2024, 1.52)]
            .into_iter()
            .map(|(year, amount)| {
                DividendPayment::new(NaiveDate::from_ymd_opt(year, 6, 1).unwrap(), amount)
            })
            .collect()
    }

    fn snapshot() -> SymbolSnapshot {
        SymbolSnapshot {
            profile: StockProfile {
                company_name: Some("Example Corp".to_string()),
                price: Some(76.0),
                market_cap: Some(5e9),
                ..StockProfile::new("EXM").with_sector("Industrials")
            },
            prices: falling_prices(30),
            dividends: dividends(),
            income_statements: vec![
                IncomeStatement {
                    revenue: Some(1331.0),
                    net_income: Some(200.0),
                    eps: Some(2.4),
                    ..Default::default()
                },
                IncomeStatement {
                    revenue: Some(1210.0),
                    eps: Some(2.2),
                    ..Default::default()
                },
                IncomeStatement {
                    revenue: Some(1100.0),
                    eps: Some(2.1),
                    ..Default::default()
                },
                IncomeStatement {
                    revenue: Some(1000.0),
                    eps: Some(2.0),
                    ..Default::default()
                },
            ],
            balance_sheets: vec![BalanceSheet {
                total_debt: Some(900.0),
                total_stockholders_equity: Some(600.0),
                total_current_assets: Some(450.0),
                total_current_liabilities: Some(300.0),
                ..Default::default()
            }],
            cash_flows: vec![CashFlowStatement {
                dividends_paid: Some(-80.0),
                free_cash_flow: Some(160.0),
                ..Default::default()
            }],
            key_metrics: vec![KeyMetrics {
                pe_ratio: Some(16.0),
                pb_ratio: Some(2.5),
                roe: Some(0.18),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_build_full_candidate() {
        let candidate = CandidateBuilder::new(SectorReitClassifier).build(&snapshot());

        assert_eq!(candidate.symbol, "EXM");
        assert_eq!(candidate.company_name.as_deref(), Some("Example Corp"));
        assert_eq!(candidate.sector, "Industrials");
        assert_relative_eq!(candidate.dividend_yield.unwrap(), 1.52 / 76.0 * 100.0);
        assert_relative_eq!(candidate.dividend_cagr_3y.unwrap(), 15.0, epsilon = 0.1);
        assert_eq!(candidate.dividend_consistent, Some(true));
        assert!(candidate.rsi.unwrap() < 40.0);
        assert_relative_eq!(candidate.revenue_cagr_3y.unwrap(), 10.0, epsilon = 1e-9);
        assert_eq!(candidate.revenue_growth_positive, Some(true));
        assert_eq!(candidate.eps_growth_positive, Some(true));
        assert_relative_eq!(candidate.payout_ratio.unwrap(), 40.0);
        assert_relative_eq!(candidate.fcf_payout_ratio.unwrap(), 50.0);
        assert!(!candidate.is_reit);
        assert_eq!(candidate.dividend_sustainable, Some(true));
        assert_relative_eq!(candidate.debt_to_equity.unwrap(), 1.5);
        assert_eq!(candidate.financially_healthy, Some(true));
        assert_relative_eq!(candidate.roe.unwrap(), 18.0, epsilon = 1e-9);
        assert!(candidate.quality_score.unwrap() > 0.0);
        assert!(candidate.stability_score.is_some());
    }

    #[test]
    fn test_build_trend_and_stability_details() {
        let candidate = CandidateBuilder::new(SectorReitClassifier).build(&snapshot());

        assert_eq!(candidate.revenue_uptrend, Some(true));
        assert_eq!(candidate.revenue_years_of_growth, Some(3));
        // net income is only reported for the latest year
        assert_eq!(candidate.earnings_uptrend, None);
        assert_eq!(candidate.earnings_years_of_growth, None);

        assert_eq!(candidate.dividend_stable, Some(true));
        assert_eq!(candidate.dividend_growing, Some(true));
        assert_eq!(candidate.dividend_years_of_growth, Some(3));
        let mean = (1.00 + 1.15 + 1.32 + 1.52) / 4.0;
        assert_relative_eq!(
            candidate.dividend_volatility_pct.unwrap(),
            (1.52 - 1.00) / mean * 100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_build_earnings_trend_when_reported() {
        let mut snap = snapshot();
        for (statement, income) in snap.income_statements.iter_mut().zip([200.0, 150.0, 170.0]) {
            statement.net_income = Some(income);
        }
        snap.income_statements.truncate(3);
        let candidate = CandidateBuilder::new(SectorReitClassifier).build(&snap);

        // oldest first: 170, 150, 200
        assert_eq!(candidate.earnings_years_of_growth, Some(1));
        assert_eq!(candidate.earnings_uptrend, Some(false));
    }

    #[test]
    fn test_build_sparse_candidate() {
        let sparse = SymbolSnapshot {
            profile: StockProfile::new("NEW"),
            ..Default::default()
        };
        let candidate = CandidateBuilder::new(SectorReitClassifier).build(&sparse);

        assert_eq!(candidate, CandidateRecord::new("NEW"));
    }

    #[test]
    fn test_from_config_uses_reit_detection() {
        let mut snap = snapshot();
        snap.profile.industry = Some("REIT - Industrial".to_string());

        let narrow = CandidateBuilder::from_config(&ScreeningConfig::default());
        assert!(!narrow.build(&snap).is_reit);

        let config = ScreeningConfig {
            reit_detection: ReitDetection::SectorOrIndustry,
            ..Default::default()
        };
        assert!(CandidateBuilder::from_config(&config).build(&snap).is_reit);
    }
}
