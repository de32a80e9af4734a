//! Relative Strength Index
//!
//! Wilder's RSI on a series of closing prices. The first `period` price
//! changes seed the average gain and loss as simple means; every later change
//! is folded in with Wilder's smoothing `avg = (avg * (period - 1) + x) / period`.
//!
//! Prices must be ordered oldest to newest. Feeding a newest-first series
//! silently yields a different (wrong) value, so reverse provider data first.

use serde::{Deserialize, Serialize};

/// Default lookback period.
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// RSI at or below this value counts as oversold.
pub const OVERSOLD_THRESHOLD: f64 = 40.0;

/// Configuration for the RSI calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RsiConfig {
    /// Lookback period in bars (default: 14)
    pub period: usize,
    /// Oversold threshold, inclusive (default: 40)
    pub oversold_threshold: f64,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_RSI_PERIOD,
            oversold_threshold: OVERSOLD_THRESHOLD,
        }
    }
}

/// Calculate the RSI of `prices` (oldest first) over `period` changes.
///
/// Returns `None` when fewer than `period + 1` prices are supplied or when
/// `period` is zero. Otherwise the result lies in `[0, 100]`; a series with
/// no losing changes in the smoothed window is exactly `100`.
pub fn calculate_rsi(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() <= period {
        return None;
    }

    let changes: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();
    let split = |change: f64| {
        if change > 0.0 {
            (change, 0.0)
        } else {
            (0.0, -change)
        }
    };

    let n = period as f64;
    let (seed_gain, seed_loss) = changes[..period]
        .iter()
        .map(|&c| split(c))
        .fold((0.0, 0.0), |(g, l), (gain, loss)| (g + gain, l + loss));

    let (avg_gain, avg_loss) = changes[period..].iter().map(|&c| split(c)).fold(
        (seed_gain / n, seed_loss / n),
        |(avg_gain, avg_loss), (gain, loss)| {
            (
                (avg_gain * (n - 1.0) + gain) / n,
                (avg_loss * (n - 1.0) + loss) / n,
            )
        },
    );

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

/// Whether `rsi` is at or below the fixed oversold threshold of 40.
pub fn is_oversold(rsi: f64) -> bool {
    rsi <= OVERSOLD_THRESHOLD
}

impl RsiConfig {
    /// RSI of `prices` with this configuration's period.
    pub fn calculate(&self, prices: &[f64]) -> Option<f64> {
        calculate_rsi(prices, self.period)
    }

    /// Oversold test against this configuration's threshold.
    pub fn is_oversold(&self, rsi: f64) -> bool {
        rsi <= self.oversold_threshold
    }
}
