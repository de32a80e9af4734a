//! Screening summaries.
//!
//! A [`ScreeningSummary`] condenses one strategy's results into the counts
//! and ranked table a reader looks at first, rendered for the terminal or
//! as Markdown.

use crate::format::{format_optional, format_payout_ratio, format_percent, format_price, format_rsi};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use yieldlens_screen::{Clause, ScoredCandidate, ScreeningResults, StrategyKind, StrategyResults};

/// Rejections attributed to one clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionCount {
    /// Clause that failed first
    pub clause: Clause,
    /// Candidates rejected on this clause
    pub count: usize,
    /// How many of those were rejected for a missing value
    pub missing: usize,
}

/// Summary of one strategy's screening run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningSummary {
    /// Strategy summarised
    pub strategy: StrategyKind,
    /// Date the underlying data describes
    pub as_of: Option<NaiveDate>,
    /// Candidates evaluated
    pub evaluated: usize,
    /// Candidates that qualified, before truncation
    pub qualified: usize,
    /// Rejections per clause, most frequent first
    pub rejections: Vec<RejectionCount>,
    /// Qualified candidates per sector, most frequent first
    pub sectors: Vec<(String, usize)>,
    /// Ranked candidates, best first
    pub top: Vec<ScoredCandidate>,
}

impl ScreeningSummary {
    /// Summarise one strategy's results.
    pub fn from_results(results: &StrategyResults, as_of: Option<NaiveDate>) -> Self {
        let mut rejections: Vec<_> = results
            .rejections
            .iter()
            .map(|(&clause, &count)| RejectionCount {
                clause,
                count,
                missing: results.missing.get(&clause).copied().unwrap_or(0),
            })
            .collect();
        rejections.sort_by(|a, b| b.count.cmp(&a.count).then(a.clause.cmp(&b.clause)));

        let mut sectors: Vec<_> =
            results.sectors.iter().map(|(sector, &n)| (sector.clone(), n)).collect();
        sectors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self {
            strategy: results.strategy,
            as_of,
            evaluated: results.evaluated,
            qualified: results.qualified_count,
            rejections,
            sectors,
            top: results.qualified.clone(),
        }
    }

    /// Share of evaluated candidates that qualified, in percent.
    pub fn pass_rate(&self) -> Option<f64> {
        (self.evaluated > 0).then(|| self.qualified as f64 / self.evaluated as f64 * 100.0)
    }

    /// Total rejections caused by missing values.
    pub fn missing_total(&self) -> usize {
        self.rejections.iter().map(|r| r.missing).sum()
    }

    fn heading(&self) -> String {
        match self.as_of {
            Some(date) => format!("{} ({date})", self.strategy.title()),
            None => self.strategy.title().to_string(),
        }
    }

    /// Format as ASCII table for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("\nScreening Summary: {}\n", self.heading()));
        output.push_str(&"=".repeat(80));
        output.push('\n');

        output.push_str(&format!("  Evaluated:                {}\n", self.evaluated));
        output.push_str(&format!(
            "  Qualified:                {} ({})\n",
            self.qualified,
            format_percent(self.pass_rate(), 1)
        ));
        output.push_str(&format!("  Missing data rejections:  {}\n", self.missing_total()));

        if !self.top.is_empty() {
            output.push_str("\nTop Candidates:\n");
            output.push_str(&"-".repeat(80));
            output.push('\n');
            let header = headers(self.strategy);
            output.push_str(&ascii_row(&header.map(String::from)));
            output.push_str(&"-".repeat(80));
            output.push('\n');
            for (i, scored) in self.top.iter().enumerate() {
                output.push_str(&ascii_row(&cells(self.strategy, i + 1, scored)));
            }
        }

        if !self.rejections.is_empty() {
            output.push_str("\nRejections:\n");
            output.push_str(&"-".repeat(80));
            output.push('\n');
            output.push_str(&format!("{:<28} {:>12} {:>12}\n", "Clause", "Rejected", "Missing"));
            for rejection in &self.rejections {
                output.push_str(&format!(
                    "{:<28} {:>12} {:>12}\n",
                    rejection.clause.field(),
                    rejection.count,
                    rejection.missing
                ));
            }
        }

        if !self.sectors.is_empty() {
            output.push_str("\nSectors:\n");
            output.push_str(&"-".repeat(80));
            output.push('\n');
            for (sector, count) in &self.sectors {
                output.push_str(&format!("{sector:<28} {count:>12}\n"));
            }
        }

        output.push_str(&"=".repeat(80));
        output.push('\n');

        output
    }

    /// Format as Markdown for documentation.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("## {}\n\n", self.heading()));
        output.push_str(&format!("- **Evaluated:** {}\n", self.evaluated));
        output.push_str(&format!(
            "- **Qualified:** {} ({})\n",
            self.qualified,
            format_percent(self.pass_rate(), 1)
        ));
        output.push_str(&format!("- **Missing data rejections:** {}\n\n", self.missing_total()));

        if self.top.is_empty() {
            output.push_str("_No candidates qualified._\n\n");
        } else {
            let header = headers(self.strategy);
            output.push_str(&format!("| {} |\n", header.join(" | ")));
            output.push_str(&format!("|{}\n", "---|".repeat(header.len())));
            for (i, scored) in self.top.iter().enumerate() {
                output.push_str(&format!(
                    "| {} |\n",
                    cells(self.strategy, i + 1, scored).join(" | ")
                ));
            }
            output.push('\n');
        }

        if !self.rejections.is_empty() {
            output.push_str("### Rejections\n\n");
            output.push_str("| Clause | Rejected | Missing |\n");
            output.push_str("|--------|----------|---------|\n");
            for rejection in &self.rejections {
                output.push_str(&format!(
                    "| {} | {} | {} |\n",
                    rejection.clause.field(),
                    rejection.count,
                    rejection.missing
                ));
            }
            output.push('\n');
        }

        output
    }
}

impl fmt::Display for ScreeningSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Screening Summary: {}", self.heading())?;
        writeln!(f, "  Evaluated: {}", self.evaluated)?;
        writeln!(f, "  Qualified: {}", self.qualified)?;
        if let Some(best) = self.top.first() {
            writeln!(f, "  Best: {} ({:.1})", best.candidate.symbol, best.score)?;
        }
        Ok(())
    }
}

const GROWTH_HEADERS: [&str; 9] =
    ["#", "Symbol", "Sector", "Price", "Yield", "Div CAGR", "Payout", "RSI", "Score"];
const VALUE_HEADERS: [&str; 9] =
    ["#", "Symbol", "Sector", "Price", "Yield", "P/E", "P/B", "RSI", "Score"];
const WIDTHS: [usize; 9] = [3, 7, 22, 9, 7, 8, 7, 6, 6];

const fn headers(strategy: StrategyKind) -> [&'static str; 9] {
    match strategy {
        StrategyKind::GrowthPullback => GROWTH_HEADERS,
        StrategyKind::ValueDividend => VALUE_HEADERS,
    }
}

fn cells(strategy: StrategyKind, rank: usize, scored: &ScoredCandidate) -> [String; 9] {
    let c = &scored.candidate;
    let (sixth, seventh) = match strategy {
        StrategyKind::GrowthPullback => (
            format_percent(c.dividend_cagr_3y, 1),
            format_payout_ratio(c.payout_ratio, c.fcf_payout_ratio),
        ),
        StrategyKind::ValueDividend => (format_optional(c.pe_ratio, 1), format_optional(c.pb_ratio, 1)),
    };
    [
        rank.to_string(),
        c.symbol.clone(),
        c.sector.clone(),
        format_price(c.price),
        format_percent(c.dividend_yield, 2),
        sixth,
        seventh,
        format_rsi(c.rsi),
        format!("{:.1}", scored.score),
    ]
}

fn ascii_row(cells: &[String; 9]) -> String {
    let mut row = String::new();
    for (i, (cell, &width)) in cells.iter().zip(WIDTHS.iter()).enumerate() {
        if i > 0 {
            row.push(' ');
        }
        // symbol and sector read left to right
        if matches!(i, 1 | 2) {
            let cell: String = cell.chars().take(width).collect();
            row.push_str(&format!("{cell:<width$}"));
        } else {
            row.push_str(&format!("{cell:>width$}"));
        }
    }
    row.push('\n');
    row
}

/// Summaries for every strategy in `results`, in run order.
pub fn generate_screening_summaries(
    results: &ScreeningResults,
    as_of: Option<NaiveDate>,
) -> Vec<ScreeningSummary> {
    results
        .strategies
        .iter()
        .map(|r| ScreeningSummary::from_results(r, as_of))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use yieldlens_screen::CandidateRecord;

    fn results(strategy: StrategyKind) -> StrategyResults {
        let candidate = CandidateRecord {
            sector: "Information Technology".to_string(),
            price: Some(182.5),
            dividend_yield: Some(1.8),
            dividend_cagr_3y: Some(14.2),
            payout_ratio: Some(140.0),
            fcf_payout_ratio: Some(48.0),
            pe_ratio: Some(12.3),
            rsi: Some(28.4),
            ..CandidateRecord::new("ACME")
        };
        StrategyResults {
            strategy,
            evaluated: 8,
            qualified_count: 2,
            qualified: vec![
                ScoredCandidate {
                    score: 81.0,
                    candidate,
                },
                ScoredCandidate {
                    score: 60.0,
                    candidate: CandidateRecord::new("BETA"),
                },
            ],
            rejections: BTreeMap::from([(Clause::Rsi, 2), (Clause::DividendCagr, 4)]),
            missing: BTreeMap::from([(Clause::DividendCagr, 1)]),
            sectors: BTreeMap::from([
                ("Information Technology".to_string(), 1),
                ("Unknown".to_string(), 1),
            ]),
        }
    }

    #[test]
    fn test_from_results_orders_rejections() {
        let summary = ScreeningSummary::from_results(&results(StrategyKind::GrowthPullback), None);

        assert_eq!(summary.rejections[0].clause, Clause::DividendCagr);
        assert_eq!(summary.rejections[0].count, 4);
        assert_eq!(summary.rejections[0].missing, 1);
        assert_eq!(summary.rejections[1].missing, 0);
        assert_eq!(summary.missing_total(), 1);
        assert_eq!(summary.pass_rate(), Some(25.0));
    }

    #[test]
    fn test_pass_rate_empty() {
        let mut empty = results(StrategyKind::ValueDividend);
        empty.evaluated = 0;
        assert_eq!(ScreeningSummary::from_results(&empty, None).pass_rate(), None);
    }

    #[test]
    fn test_ascii_table() {
        let as_of = NaiveDate::from_ymd_opt(2025, 1, 31);
        let summary = ScreeningSummary::from_results(&results(StrategyKind::GrowthPullback), as_of);
        let table = summary.to_ascii_table();

        assert!(table.contains("Dividend Growth Pullback (2025-01-31)"));
        assert!(table.contains("Qualified:                2 (25.0%)"));
        assert!(table.contains("Div CAGR"));
        assert!(table.contains("14.2%"));
        // earnings payout over 100% shows the FCF ratio
        assert!(table.contains("48%"));
        assert!(table.contains("28**"));
        assert!(table.contains("dividend_cagr_3y"));
        assert!(table.contains("Information Technology"));
    }

    #[test]
    fn test_markdown() {
        let summary = ScreeningSummary::from_results(&results(StrategyKind::ValueDividend), None);
        let markdown = summary.to_markdown();

        assert!(markdown.starts_with("## Value Dividend\n"));
        assert!(markdown.contains("| # | Symbol | Sector | Price | Yield | P/E | P/B | RSI | Score |"));
        assert!(markdown.contains("| 1 | ACME | Information Technology | $182.50 | 1.80% | 12.3 | N/A | 28** | 81.0 |"));
        assert!(markdown.contains("| 2 | BETA | Unknown | N/A | N/A | N/A | N/A | N/A | 60.0 |"));
        assert!(markdown.contains("### Rejections"));
    }

    #[test]
    fn test_markdown_no_candidates() {
        let mut none = results(StrategyKind::ValueDividend);
        none.qualified.clear();
        let markdown = ScreeningSummary::from_results(&none, None).to_markdown();
        assert!(markdown.contains("_No candidates qualified._"));
    }

    #[test]
    fn test_display() {
        let summary = ScreeningSummary::from_results(&results(StrategyKind::GrowthPullback), None);
        let display = summary.to_string();
        assert!(display.contains("Evaluated: 8"));
        assert!(display.contains("Best: ACME (81.0)"));
    }

    #[test]
    fn test_generate_screening_summaries() {
        let screening = ScreeningResults {
            strategies: vec![
                results(StrategyKind::GrowthPullback),
                results(StrategyKind::ValueDividend),
            ],
        };
        let summaries = generate_screening_summaries(&screening, None);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].strategy, StrategyKind::ValueDividend);
    }
}
