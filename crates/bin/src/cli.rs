//! Command-line arguments.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use yieldlens::metrics::momentum::DEFAULT_RSI_PERIOD;
use yieldlens::screen::StrategyKind;

#[derive(Debug, Parser)]
#[command(name = "yieldlens")]
#[command(about = "Yieldlens: dividend stock screening", long_about = None)]
#[command(version)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Compute metrics for every symbol in a snapshot and screen them
    Screen {
        /// Snapshot JSON file
        #[arg(long)]
        input: PathBuf,

        #[command(flatten)]
        options: ScreenOptions,
    },

    /// Screen pre-built candidate records
    Qualify {
        /// Candidate records JSON file (an array of flat records)
        #[arg(long)]
        input: PathBuf,

        #[command(flatten)]
        options: ScreenOptions,
    },

    /// Compute the RSI of a price series, oldest price first
    Rsi {
        /// Lookback period
        #[arg(long, default_value_t = DEFAULT_RSI_PERIOD)]
        period: usize,

        /// Closing prices
        #[arg(required = true)]
        prices: Vec<f64>,
    },

    /// List the available metrics
    Metrics {
        /// Only list one category (momentum, payout, growth, quality)
        #[arg(long)]
        category: Option<String>,
    },
}

/// Options shared by the screening commands.
#[derive(Debug, Args)]
pub(crate) struct ScreenOptions {
    /// Configuration file (default: <config dir>/yieldlens/config.toml)
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,

    /// Strategy to run
    #[arg(long, value_enum, default_value_t = StrategySelection::All)]
    pub(crate) strategy: StrategySelection,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,

    /// Ranked candidates kept per strategy
    #[arg(long)]
    pub(crate) top: Option<usize>,
}

/// Strategy selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum StrategySelection {
    /// Every strategy enabled in the configuration
    All,
    /// Dividend growth pullback only
    GrowthPullback,
    /// Value dividend only
    ValueDividend,
}

impl StrategySelection {
    /// The single strategy selected, if any.
    pub(crate) const fn kind(self) -> Option<StrategyKind> {
        match self {
            Self::All => None,
            Self::GrowthPullback => Some(StrategyKind::GrowthPullback),
            Self::ValueDividend => Some(StrategyKind::ValueDividend),
        }
    }
}

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// ASCII tables for terminal display
    Text,
    /// Markdown report
    Markdown,
    /// One CSV row per ranked candidate
    Csv,
    /// JSON report envelope
    Json,
}
