//! Forward-looking training label construction

/// Builds the training target: percentage change of close over a fixed
/// future horizon.
///
/// `label[t] = close[t + horizon] / close[t] - 1`, undefined for the last
/// `horizon` indices. This is the only forward-looking value in the system
/// and must never be fed back into feature vectors at inference time.
#[derive(Debug, Clone, Copy)]
pub struct LabelBuilder {
    horizon: usize,
}

impl LabelBuilder {
    /// Create a builder for the given forward horizon (in candles)
    pub fn new(horizon: usize) -> Self {
        Self { horizon }
    }

    /// Get the forward horizon
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Compute labels for a close-price series.
    ///
    /// A horizon at or beyond the series length yields all-`None` — a valid
    /// state signaling insufficient data, not an error.
    pub fn build(&self, closes: &[f64]) -> Vec<Option<f64>> {
        (0..closes.len())
            .map(|t| {
                closes
                    .get(t + self.horizon)
                    .map(|&future| future / closes[t] - 1.0)
            })
            .collect()
    }
}
