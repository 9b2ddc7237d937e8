//! Feature engineering over candle series

use crate::config::SignalConfig;
use crate::data::CandleSeries;
use crate::features::FeatureFrame;
use crate::indicators::{calculate_atr, calculate_ema, calculate_macd, calculate_rsi, calculate_sma};
use chrono::{Datelike, Timelike};
use tracing::debug;

/// Signal span of the trend-convergence (MACD) triple, fixed across periods
const MACD_SIGNAL_SPAN: usize = 9;

/// Derives feature columns from a candle series.
///
/// For each configured lookback period `p`: RSI, the MACD triple
/// (fast = p, slow = 2p), EMA, rolling volume mean, close percentage change
/// over `p`, high/low ratio, and ATR. Plus a fixed set of one-shot features
/// independent of any period.
///
/// Everything at index `t` uses only candles at or before `t`; indices whose
/// window exceeds the available history carry `None` and are expected to be
/// discarded by the caller (see [`startup_count`](Self::startup_count)).
#[derive(Debug, Clone)]
pub struct FeatureEngineer {
    periods: Vec<usize>,
}

impl FeatureEngineer {
    /// Create an engineer for the configured lookback periods
    pub fn new(config: &SignalConfig) -> Self {
        Self {
            periods: config.lookback_periods.clone(),
        }
    }

    /// Number of leading rows the caller must discard before use.
    ///
    /// The MACD triple has the longest warmup: slow span (2p) plus the
    /// signal span, settling one index later.
    pub fn startup_count(&self) -> usize {
        let max_period = self.periods.iter().copied().max().unwrap_or(0);
        max_period * 2 + MACD_SIGNAL_SPAN + 1
    }

    /// Compute the full feature frame for a candle series
    pub fn compute(&self, series: &CandleSeries) -> FeatureFrame {
        let mut frame = FeatureFrame::new(series.len());

        let closes = series.closes();
        let highs = series.highs();
        let lows = series.lows();
        let volumes = series.volumes();

        for &period in &self.periods {
            self.expand_period(&mut frame, period, &closes, &highs, &lows, &volumes);
        }
        self.add_basic(&mut frame, series, &closes, &volumes);

        debug!(
            rows = frame.len(),
            columns = frame.width(),
            startup = self.startup_count(),
            "computed feature frame"
        );
        frame
    }

    /// Period-expanded features, namespaced by the period
    fn expand_period(
        &self,
        frame: &mut FeatureFrame,
        period: usize,
        closes: &[f64],
        highs: &[f64],
        lows: &[f64],
        volumes: &[f64],
    ) {
        frame.insert(format!("rsi_{period}"), calculate_rsi(closes, period));

        let macd = calculate_macd(closes, period, period * 2, MACD_SIGNAL_SPAN);
        frame.insert(
            format!("macd_{period}"),
            macd.iter().map(|o| o.map(|o| o.macd)).collect(),
        );
        frame.insert(
            format!("macd_signal_{period}"),
            macd.iter().map(|o| o.map(|o| o.signal)).collect(),
        );
        frame.insert(
            format!("macd_hist_{period}"),
            macd.iter().map(|o| o.map(|o| o.histogram)).collect(),
        );

        frame.insert(format!("ema_{period}"), calculate_ema(closes, period));
        frame.insert(
            format!("volume_mean_{period}"),
            calculate_sma(volumes, period),
        );
        frame.insert(format!("close_pct_{period}"), pct_change(closes, period));

        // Instantaneous ratio, but recomputed for each expansion pass
        frame.insert(
            format!("hl_ratio_{period}"),
            highs.iter().zip(lows).map(|(h, l)| Some(h / l)).collect(),
        );

        frame.insert(
            format!("atr_{period}"),
            calculate_atr(highs, lows, closes, period),
        );
    }

    /// One-shot features computed once per call, independent of any period
    fn add_basic(
        &self,
        frame: &mut FeatureFrame,
        series: &CandleSeries,
        closes: &[f64],
        volumes: &[f64],
    ) {
        frame.insert("pct_change", pct_change(closes, 1));
        frame.insert("volume_pct", pct_change(volumes, 1));

        frame.insert(
            "day_of_week",
            series
                .candles()
                .iter()
                .map(|c| Some(c.timestamp.weekday().num_days_from_monday() as f64))
                .collect(),
        );
        frame.insert(
            "hour_of_day",
            series
                .candles()
                .iter()
                .map(|c| Some(c.timestamp.hour() as f64))
                .collect(),
        );

        frame.insert("raw_close", closes.iter().map(|&c| Some(c)).collect());
        frame.insert("raw_volume", volumes.iter().map(|&v| Some(v)).collect());

        frame.insert(
            "close_to_high",
            series
                .candles()
                .iter()
                .map(|c| Some(c.close / c.high))
                .collect(),
        );
        frame.insert(
            "close_to_low",
            series
                .candles()
                .iter()
                .map(|c| Some(c.close / c.low))
                .collect(),
        );
        frame.insert(
            "body_pct",
            series
                .candles()
                .iter()
                .map(|c| Some(c.body_size() / c.open))
                .collect(),
        );
    }
}

/// Percentage change over `period` steps: `x[t] / x[t - period] - 1`
fn pct_change(values: &[f64], period: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|t| {
            if t >= period {
                Some(values[t] / values[t - period] - 1.0)
            } else {
                None
            }
        })
        .collect()
}
