//! SMA (Simple Moving Average) indicator
//!
//! Also used as the rolling mean for volume features.

use crate::indicators::Indicator;
use ta::indicators::SimpleMovingAverage;
use ta::Next;

/// SMA indicator wrapper
#[derive(Debug)]
pub struct SMA {
    inner: SimpleMovingAverage,
    period: usize,
    update_count: usize,
    last_value: Option<f64>,
}

impl SMA {
    /// Create new SMA indicator
    pub fn new(period: usize) -> Self {
        Self {
            inner: SimpleMovingAverage::new(period).unwrap(),
            period,
            update_count: 0,
            last_value: None,
        }
    }

    /// Get SMA period
    pub fn period(&self) -> usize {
        self.period
    }
}

impl Indicator for SMA {
    fn name(&self) -> &str {
        "SMA"
    }

    fn update(&mut self, value: f64) {
        let sma_value = self.inner.next(value);
        self.update_count += 1;
        if self.update_count >= self.period {
            self.last_value = Some(sma_value);
        }
    }

    fn value(&self) -> Option<f64> {
        self.last_value
    }

    fn is_ready(&self) -> bool {
        self.update_count >= self.period
    }
}

/// Calculate rolling mean over a value series, `None` until the window fills
pub fn calculate_sma(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut sma = SMA::new(period);
    values
        .iter()
        .map(|&value| {
            sma.update(value);
            sma.value()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_rolling_mean() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let sma = calculate_sma(&values, 3);

        assert_eq!(sma[0], None);
        assert_eq!(sma[1], None);
        assert_eq!(sma[2], Some(2.0));
        assert_eq!(sma[3], Some(3.0));
        assert_eq!(sma[4], Some(4.0));
    }
}
