//! Entry/exit signal evaluation

use crate::config::SignalConfig;
use crate::strategy::Prediction;
use crate::Result;
use tracing::debug;

/// Entry/exit decision for one candle index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Signal {
    /// Open a long position
    pub enter_long: bool,
    /// Close a long position
    pub exit_long: bool,
}

/// Combines predictor output, the reliability flag, and an auxiliary RSI
/// into boolean entry/exit signals.
///
/// Entry requires all of: prediction above the entry threshold, RSI below
/// the overbought level, and a reliable prediction. Exit requires only the
/// prediction dropping below the exit threshold — deliberately no
/// reliability gate, so a negative momentum forecast always closes the
/// position.
///
/// Because the entry threshold sits strictly above the exit threshold
/// (enforced at construction), no single prediction value can satisfy both
/// predicates: `enter_long` and `exit_long` are mutually exclusive.
#[derive(Debug, Clone)]
pub struct SignalEvaluator {
    entry_threshold: f64,
    exit_threshold: f64,
    rsi_overbought: f64,
}

impl SignalEvaluator {
    /// Create an evaluator from a validated configuration
    pub fn new(config: &SignalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            entry_threshold: config.entry_threshold,
            exit_threshold: config.exit_threshold,
            rsi_overbought: config.rsi_overbought,
        })
    }

    /// Evaluate signals for every index.
    ///
    /// `predictions` and `oscillator` are aligned per candle index; an
    /// undefined oscillator value (warmup) makes the entry condition false
    /// at that index. Pure over its inputs, no cross-index state.
    pub fn evaluate(&self, predictions: &[Prediction], oscillator: &[Option<f64>]) -> Vec<Signal> {
        let len = predictions.len().min(oscillator.len());
        let predictions = &predictions[..len];
        let oscillator = &oscillator[..len];

        let above_entry: Vec<bool> = predictions
            .iter()
            .map(|p| p.value > self.entry_threshold)
            .collect();
        let not_overbought: Vec<bool> = oscillator
            .iter()
            .map(|rsi| rsi.is_some_and(|v| v < self.rsi_overbought))
            .collect();
        let reliable: Vec<bool> = predictions
            .iter()
            .map(|p| p.confidence.is_reliable())
            .collect();

        let enter = and_masks(&[&above_entry, &not_overbought, &reliable]);

        let below_exit: Vec<bool> = predictions
            .iter()
            .map(|p| p.value < self.exit_threshold)
            .collect();
        let exit = and_masks(&[&below_exit]);

        let signals: Vec<Signal> = enter
            .into_iter()
            .zip(exit)
            .map(|(enter_long, exit_long)| Signal {
                enter_long,
                exit_long,
            })
            .collect();

        debug!(
            entries = signals.iter().filter(|s| s.enter_long).count(),
            exits = signals.iter().filter(|s| s.exit_long).count(),
            total = signals.len(),
            "evaluated signals"
        );
        signals
    }
}

/// Elementwise AND over aligned boolean masks.
///
/// Each condition contributes one mask; a single-element list degenerates to
/// a copy of that mask, which keeps short condition lists explicit and easy
/// to extend.
pub fn and_masks(masks: &[&[bool]]) -> Vec<bool> {
    let len = masks.first().map_or(0, |m| m.len());
    (0..len).map(|i| masks.iter().all(|m| m[i])).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Prediction;

    fn evaluator() -> SignalEvaluator {
        SignalEvaluator::new(&SignalConfig::default()).unwrap()
    }

    #[test]
    fn test_entry_requires_all_conditions() {
        let eval = evaluator();
        let predictions = vec![
            Prediction::reliable(0.02),   // all conditions hold
            Prediction::reliable(0.005),  // below entry threshold
            Prediction::unreliable(0.02), // unreliable
            Prediction::reliable(0.02),   // overbought
            Prediction::reliable(0.02),   // oscillator undefined
        ];
        let oscillator = vec![Some(50.0), Some(50.0), Some(50.0), Some(80.0), None];

        let signals = eval.evaluate(&predictions, &oscillator);
        assert!(signals[0].enter_long);
        assert!(!signals[1].enter_long);
        assert!(!signals[2].enter_long);
        assert!(!signals[3].enter_long);
        assert!(!signals[4].enter_long);
    }

    #[test]
    fn test_exit_ignores_confidence_and_oscillator() {
        let eval = evaluator();
        let predictions = vec![
            Prediction::reliable(-0.01),
            Prediction::unreliable(-0.01),
            Prediction::reliable(0.0),
        ];
        let oscillator = vec![None, Some(90.0), Some(50.0)];

        let signals = eval.evaluate(&predictions, &oscillator);
        assert!(signals[0].exit_long);
        assert!(signals[1].exit_long);
        assert!(!signals[2].exit_long);
    }

    #[test]
    fn test_enter_and_exit_mutually_exclusive() {
        let eval = evaluator();
        let predictions: Vec<Prediction> = (-100..=100)
            .map(|i| Prediction::reliable(i as f64 / 1000.0))
            .collect();
        let oscillator = vec![Some(40.0); predictions.len()];

        for signal in eval.evaluate(&predictions, &oscillator) {
            assert!(!(signal.enter_long && signal.exit_long));
        }
    }

    #[test]
    fn test_and_masks_degenerate_single_mask() {
        let mask = vec![true, false, true];
        assert_eq!(and_masks(&[&mask]), mask);
        assert!(and_masks(&[]).is_empty());
    }

    #[test]
    fn test_and_masks_elementwise() {
        let a = vec![true, true, false];
        let b = vec![true, false, true];
        assert_eq!(and_masks(&[&a, &b]), vec![true, false, false]);
    }
}
