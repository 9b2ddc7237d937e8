//! Predictor seam
//!
//! The regression model itself is an external capability. Signal logic only
//! sees this trait, so it can be tested against a stub without a real model.

use crate::features::FeatureVector;

/// Discrete reliability flag attached to each prediction.
///
/// Marks whether the model considers its own output trustworthy for the
/// current regime (e.g. the inputs fall inside the training distribution).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    /// The prediction may be acted on
    Reliable,
    /// The prediction must not trigger an entry
    Unreliable,
}

impl Confidence {
    /// Check the reliable state
    pub fn is_reliable(self) -> bool {
        self == Confidence::Reliable
    }
}

/// One prediction per candle index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Predicted percentage price change over the label horizon
    pub value: f64,
    /// Reliability flag
    pub confidence: Confidence,
}

impl Prediction {
    /// Create a reliable prediction
    pub fn reliable(value: f64) -> Self {
        Self {
            value,
            confidence: Confidence::Reliable,
        }
    }

    /// Create an unreliable prediction
    pub fn unreliable(value: f64) -> Self {
        Self {
            value,
            confidence: Confidence::Unreliable,
        }
    }
}

/// External regression model: feature vector in, scalar prediction plus
/// reliability flag out.
pub trait Predictor {
    /// Predict the forward percentage change for one feature vector
    fn predict(&self, features: &FeatureVector) -> Prediction;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_flag() {
        assert!(Prediction::reliable(0.02).confidence.is_reliable());
        assert!(!Prediction::unreliable(0.02).confidence.is_reliable());
    }
}
