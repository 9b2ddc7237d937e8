//! ATR (Average True Range) volatility indicator
//!
//! Implemented directly with Wilder smoothing: the `ta` crate's f64-driven
//! update path only sees close prices, but true range needs high/low too.

/// ATR indicator with Wilder smoothing.
///
/// Driven by full high/low/close triples, so it does not implement the
/// close-only [`Indicator`](crate::indicators::Indicator) trait.
#[derive(Debug, Clone)]
pub struct ATR {
    period: usize,
    prev_close: Option<f64>,
    sum: f64,
    count: usize,
    atr: f64,
    warm: bool,
}

impl ATR {
    /// Create new ATR indicator
    pub fn new(period: usize) -> Self {
        Self {
            period,
            prev_close: None,
            sum: 0.0,
            count: 0,
            atr: 0.0,
            warm: false,
        }
    }

    /// Get ATR period
    pub fn period(&self) -> usize {
        self.period
    }

    /// Update with one candle's high/low/close
    pub fn update(&mut self, high: f64, low: f64, close: f64) {
        let tr = match self.prev_close {
            Some(prev) => (high - low)
                .max((high - prev).abs())
                .max((low - prev).abs()),
            None => high - low,
        };
        self.prev_close = Some(close);

        if self.warm {
            // Wilder smoothing: ATR = (prev_ATR * (N-1) + TR) / N
            self.atr = (self.atr * (self.period as f64 - 1.0) + tr) / self.period as f64;
        } else {
            self.sum += tr;
            self.count += 1;
            if self.count >= self.period {
                self.atr = self.sum / self.period as f64;
                self.warm = true;
            }
        }
    }

    /// Get current ATR value
    pub fn value(&self) -> Option<f64> {
        if self.warm {
            Some(self.atr)
        } else {
            None
        }
    }

    /// Check if the warmup window has filled
    pub fn is_ready(&self) -> bool {
        self.warm
    }
}

/// Calculate ATR over aligned high/low/close series, `None` until the window fills
pub fn calculate_atr(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut atr = ATR::new(period);
    highs
        .iter()
        .zip(lows)
        .zip(closes)
        .map(|((&high, &low), &close)| {
            atr.update(high, low, close);
            atr.value()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atr_constant_range() {
        // Every candle spans exactly 2.0 with no gaps, so ATR converges to 2.0
        let highs: Vec<f64> = (0..20).map(|_| 101.0).collect();
        let lows: Vec<f64> = (0..20).map(|_| 99.0).collect();
        let closes: Vec<f64> = (0..20).map(|_| 100.0).collect();

        let atr = calculate_atr(&highs, &lows, &closes, 5);
        assert!(atr[..4].iter().all(|v| v.is_none()));
        for v in atr[4..].iter().flatten() {
            assert!((v - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_atr_gap_expands_true_range() {
        // A gap above the prior close widens TR beyond high - low
        let highs = vec![101.0, 101.0, 101.0, 110.0];
        let lows = vec![99.0, 99.0, 99.0, 108.0];
        let closes = vec![100.0, 100.0, 100.0, 109.0];

        let atr = calculate_atr(&highs, &lows, &closes, 3);
        // TR of the gap candle is 110 - 100 = 10, pulled into the Wilder average
        assert!(atr[3].unwrap() > 2.0);
    }
}
