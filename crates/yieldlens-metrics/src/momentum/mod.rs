//! Momentum indicators computed on closing prices.

pub mod rsi;

pub use rsi::{DEFAULT_RSI_PERIOD, OVERSOLD_THRESHOLD, RsiConfig, calculate_rsi, is_oversold};
