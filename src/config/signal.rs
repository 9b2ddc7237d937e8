//! Signal pipeline configuration

use crate::Result;
use serde::{Deserialize, Serialize};

/// Signal pipeline configuration
///
/// Immutable once constructed; every component of the pipeline reads from
/// this struct rather than from module-level constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Lookback periods (in candles) the feature engineer expands over
    pub lookback_periods: Vec<usize>,
    /// Forward horizon (in candles) for the training label
    pub label_horizon: usize,
    /// Window of the auxiliary RSI used as the entry filter
    pub oscillator_period: usize,
    /// Minimum predicted gain to enter long (e.g. 0.01 = +1%)
    pub entry_threshold: f64,
    /// Predicted change below which a long is exited (e.g. -0.005 = -0.5%)
    pub exit_threshold: f64,
    /// RSI level above which entries are suppressed
    pub rsi_overbought: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            lookback_periods: vec![14, 28],
            label_horizon: 24,
            oscillator_period: 14,
            entry_threshold: 0.01,
            exit_threshold: -0.005,
            rsi_overbought: 70.0,
        }
    }
}

impl SignalConfig {
    /// Validate the configuration.
    ///
    /// The entry threshold must sit strictly above the exit threshold:
    /// both predicates cut the same predicted scalar from opposite sides,
    /// and the gap is what keeps enter/exit signals mutually exclusive.
    pub fn validate(&self) -> Result<()> {
        if self.lookback_periods.is_empty() {
            anyhow::bail!("at least one lookback period is required");
        }
        if self.lookback_periods.iter().any(|&p| p == 0) {
            anyhow::bail!("lookback periods must be non-zero");
        }
        if self.oscillator_period == 0 {
            anyhow::bail!("oscillator period must be non-zero");
        }
        if self.entry_threshold <= self.exit_threshold {
            anyhow::bail!(
                "entry threshold ({}) must be greater than exit threshold ({})",
                self.entry_threshold,
                self.exit_threshold
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SignalConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let config = SignalConfig {
            entry_threshold: -0.01,
            exit_threshold: 0.005,
            ..SignalConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_equal_thresholds() {
        let config = SignalConfig {
            entry_threshold: 0.0,
            exit_threshold: 0.0,
            ..SignalConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_periods() {
        let config = SignalConfig {
            lookback_periods: vec![],
            ..SignalConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
