//! Technical indicators module
//!
//! Streaming indicator wrappers over the `ta` crate, plus batch helpers
//! that map a value series to `Vec<Option<f64>>`. A `None` entry means the
//! indicator's lookback window was not yet filled at that index — callers
//! filter leading rows rather than treating them as errors.

pub mod atr;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use atr::*;
pub use ema::*;
pub use macd::*;
pub use rsi::*;
pub use sma::*;

/// Indicator trait for close-driven indicators
pub trait Indicator {
    /// Get the name of the indicator
    fn name(&self) -> &str;

    /// Update indicator with new value
    fn update(&mut self, value: f64);

    /// Get current indicator value
    fn value(&self) -> Option<f64>;

    /// Check if indicator is ready (has enough data)
    fn is_ready(&self) -> bool;
}
