//! Quality gate threshold configuration

use serde::{Deserialize, Serialize};

/// Default minimum Sortino ratio
pub const DEFAULT_MIN_SORTINO: f64 = 1.5;
/// Default maximum drawdown, in percent
pub const DEFAULT_MAX_DRAWDOWN_PCT: f64 = 20.0;
/// Default minimum trade count (too few trades = unreliable stats)
pub const DEFAULT_MIN_TRADES: u64 = 20;
/// Default minimum win rate, in percent
pub const DEFAULT_MIN_WIN_RATE_PCT: f64 = 45.0;

/// Quality gate thresholds
///
/// Immutable configuration passed into the gate; defaults can be
/// overridden per-field (e.g. from CLI flags).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    /// Minimum acceptable Sortino ratio
    pub min_sortino: f64,
    /// Maximum acceptable drawdown, in percent
    pub max_drawdown_pct: f64,
    /// Minimum number of trades for the stats to be trusted
    pub min_trades: u64,
    /// Minimum win rate, in percent
    pub min_win_rate_pct: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_sortino: DEFAULT_MIN_SORTINO,
            max_drawdown_pct: DEFAULT_MAX_DRAWDOWN_PCT,
            min_trades: DEFAULT_MIN_TRADES,
            min_win_rate_pct: DEFAULT_MIN_WIN_RATE_PCT,
        }
    }
}
