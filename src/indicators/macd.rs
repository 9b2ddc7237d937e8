//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::Indicator;
use ta::indicators::MovingAverageConvergenceDivergence;
use ta::Next;

/// MACD output triple
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MACDOutput {
    /// Main line (fast EMA - slow EMA)
    pub macd: f64,
    /// Signal line (EMA of the main line)
    pub signal: f64,
    /// Histogram (main - signal)
    pub histogram: f64,
}

/// MACD indicator wrapper
#[derive(Debug)]
pub struct MACD {
    inner: MovingAverageConvergenceDivergence,
    slow_period: usize,
    signal_period: usize,
    update_count: usize,
    last_output: Option<MACDOutput>,
}

impl MACD {
    /// Create new MACD indicator
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            inner: MovingAverageConvergenceDivergence::new(fast_period, slow_period, signal_period)
                .unwrap(),
            slow_period,
            signal_period,
            update_count: 0,
            last_output: None,
        }
    }

    /// Get MACD line value
    pub fn macd(&self) -> Option<f64> {
        self.last_output.map(|o| o.macd)
    }

    /// Get signal line value
    pub fn signal(&self) -> Option<f64> {
        self.last_output.map(|o| o.signal)
    }

    /// Get histogram value (MACD - Signal)
    pub fn histogram(&self) -> Option<f64> {
        self.last_output.map(|o| o.histogram)
    }

    /// Get the full output triple
    pub fn output(&self) -> Option<MACDOutput> {
        self.last_output
    }
}

impl Indicator for MACD {
    fn name(&self) -> &str {
        "MACD"
    }

    fn update(&mut self, value: f64) {
        let output = self.inner.next(value);
        self.update_count += 1;
        // Needs slow_period + signal_period values before output settles
        if self.update_count > self.slow_period + self.signal_period {
            self.last_output = Some(MACDOutput {
                macd: output.macd,
                signal: output.signal,
                histogram: output.histogram,
            });
        }
    }

    fn value(&self) -> Option<f64> {
        self.macd()
    }

    fn is_ready(&self) -> bool {
        self.update_count > self.slow_period + self.signal_period
    }
}

/// Calculate the MACD triple over a value series, `None` until the window fills
pub fn calculate_macd(
    values: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Vec<Option<MACDOutput>> {
    let mut macd = MACD::new(fast_period, slow_period, signal_period);
    values
        .iter()
        .map(|&value| {
            macd.update(value);
            macd.output()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macd_warmup() {
        let values: Vec<f64> = (0..60).map(|i| 100.0 + i as f64 * 0.1).collect();
        let out = calculate_macd(&values, 12, 26, 9);

        assert!(out[..35].iter().all(|v| v.is_none()));
        assert!(out[35..].iter().all(|v| v.is_some()));

        let last = out.last().unwrap().unwrap();
        assert!((last.histogram - (last.macd - last.signal)).abs() < 1e-9);
    }
}
