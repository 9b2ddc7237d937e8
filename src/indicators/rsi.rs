//! RSI (Relative Strength Index) indicator

use crate::indicators::Indicator;
use ta::indicators::RelativeStrengthIndex;
use ta::Next;

/// Bounded momentum oscillator on a 0-100 scale.
#[derive(Debug)]
pub struct RSI {
    inner: RelativeStrengthIndex,
    period: usize,
    update_count: usize,
    last_value: Option<f64>,
}

impl RSI {
    /// Create new RSI indicator
    pub fn new(period: usize) -> Self {
        Self {
            inner: RelativeStrengthIndex::new(period).unwrap(),
            period,
            update_count: 0,
            last_value: None,
        }
    }

    /// Get RSI period
    pub fn period(&self) -> usize {
        self.period
    }
}

impl Indicator for RSI {
    fn name(&self) -> &str {
        "RSI"
    }

    fn update(&mut self, value: f64) {
        let rsi_value = self.inner.next(value);
        self.update_count += 1;
        // ta RSI needs period+1 values before the output is meaningful
        if self.update_count > self.period {
            self.last_value = Some(rsi_value);
        }
    }

    fn value(&self) -> Option<f64> {
        self.last_value
    }

    fn is_ready(&self) -> bool {
        self.update_count > self.period
    }
}

/// Calculate RSI over a value series, `None` until the window fills
pub fn calculate_rsi(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut rsi = RSI::new(period);
    values
        .iter()
        .map(|&value| {
            rsi.update(value);
            rsi.value()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_warmup() {
        let values: Vec<f64> = (0..30).map(|i| 100.0 + (i % 5) as f64).collect();
        let rsi = calculate_rsi(&values, 14);

        assert_eq!(rsi.len(), values.len());
        assert!(rsi[..14].iter().all(|v| v.is_none()));
        assert!(rsi[14..].iter().all(|v| v.is_some()));
        for v in rsi.iter().flatten() {
            assert!((0.0..=100.0).contains(v));
        }
    }

    #[test]
    fn test_rsi_not_ready_with_short_series() {
        let mut rsi = RSI::new(14);
        for i in 0..10 {
            rsi.update(100.0 + i as f64);
        }
        assert!(!rsi.is_ready());
        assert!(rsi.value().is_none());
    }
}
