//! Signal-Trader: feature engineering, ML-driven trade signals, and a
//! backtest quality gate.
//!
//! This crate turns raw OHLCV candle series into model-ready feature vectors
//! and leakage-safe training labels, combines an externally supplied
//! predictor with an RSI filter into boolean entry/exit signals, and
//! validates completed backtest results against risk/performance thresholds
//! before deployment.
//!
//! # Components
//!
//! - **Data**: OHLCV candle types and batch series container
//! - **Indicators**: RSI, MACD, EMA, SMA, ATR with warmup-aware values
//! - **Features**: per-period feature columns and forward-looking labels
//! - **Strategy**: predictor seam, signal evaluation, batch pipeline
//! - **Gate**: backtest result quality gate with pass/fail verdict
//!
//! # Example
//!
//! ```no_run
//! use signal_trader::prelude::*;
//!
//! fn run(series: &CandleSeries, model: impl Predictor) -> Result<Vec<Signal>> {
//!     let pipeline = SignalPipeline::new(SignalConfig::default(), model)?;
//!     pipeline.run(series)
//! }
//! ```

pub mod config;
pub mod data;
pub mod features;
pub mod gate;
pub mod indicators;
pub mod strategy;

// Re-export commonly used types
pub mod prelude {
    pub use crate::config::*;
    pub use crate::data::*;
    pub use crate::features::*;
    pub use crate::gate::*;
    pub use crate::indicators::*;
    pub use crate::strategy::*;

    pub use anyhow::{Context, Result};
}

/// Result type alias
pub type Result<T> = anyhow::Result<T>;
