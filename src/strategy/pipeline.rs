//! Batch signal pipeline
//!
//! Runs the whole inference path over a historical series in one pass:
//! candles → features → predictor → signals. The host engine consumes the
//! resulting entry/exit booleans to open and close positions.

use crate::config::SignalConfig;
use crate::data::CandleSeries;
use crate::features::{FeatureEngineer, LabelBuilder};
use crate::indicators::calculate_rsi;
use crate::strategy::{Predictor, Signal, SignalEvaluator};
use crate::Result;
use tracing::info;

/// Batch pipeline over a candle series with an injected predictor.
///
/// Recomputes everything on each invocation; no incremental state.
pub struct SignalPipeline<P: Predictor> {
    config: SignalConfig,
    engineer: FeatureEngineer,
    evaluator: SignalEvaluator,
    predictor: P,
}

impl<P: Predictor> SignalPipeline<P> {
    /// Create a pipeline; fails if the configuration is invalid
    pub fn new(config: SignalConfig, predictor: P) -> Result<Self> {
        let engineer = FeatureEngineer::new(&config);
        let evaluator = SignalEvaluator::new(&config)?;
        Ok(Self {
            config,
            engineer,
            evaluator,
            predictor,
        })
    }

    /// Number of leading rows whose signals rest on incomplete features
    pub fn startup_count(&self) -> usize {
        self.engineer.startup_count()
    }

    /// Run the full inference path, one signal per candle index.
    ///
    /// Leading rows within [`startup_count`](Self::startup_count) carry
    /// signals derived from incomplete feature vectors; the host engine is
    /// expected to discard them.
    pub fn run(&self, series: &CandleSeries) -> Result<Vec<Signal>> {
        let frame = self.engineer.compute(series);

        let predictions: Vec<_> = (0..series.len())
            .map(|t| self.predictor.predict(&frame.row(t)))
            .collect();

        // Plain entry-filter RSI, independent of the feature set
        let oscillator = calculate_rsi(&series.closes(), self.config.oscillator_period);

        let signals = self.evaluator.evaluate(&predictions, &oscillator);
        info!(
            candles = series.len(),
            startup = self.startup_count(),
            entries = signals.iter().filter(|s| s.enter_long).count(),
            exits = signals.iter().filter(|s| s.exit_long).count(),
            "signal pipeline run complete"
        );
        Ok(signals)
    }

    /// Training-side labels for the same series and configuration.
    ///
    /// Shares the configured horizon with inference so training and live
    /// evaluation never drift apart. Never included in feature output.
    pub fn training_labels(&self, series: &CandleSeries) -> Vec<Option<f64>> {
        LabelBuilder::new(self.config.label_horizon).build(&series.closes())
    }
}
