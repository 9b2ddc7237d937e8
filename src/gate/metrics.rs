//! Backtest metric extraction and normalization

use serde_json::Value;

/// Metrics extracted from one strategy's backtest record.
///
/// Absent fields default to zero; the drawdown is reconciled to percent and
/// the win rate derived, so downstream checks compare in a single unit.
#[derive(Debug, Clone)]
pub struct BacktestMetrics {
    /// Number of closed trades
    pub total_trades: u64,
    /// Winning trades
    pub wins: u64,
    /// Losing trades
    pub losses: u64,
    /// Win rate in percent, 0 when no trades
    pub win_rate_pct: f64,
    /// Sortino ratio
    pub sortino: f64,
    /// Maximum drawdown in percent
    pub max_drawdown_pct: f64,
    /// Total profit
    pub profit_total: f64,
    /// Sharpe ratio
    pub sharpe: f64,
    /// Backtest period start, as reported
    pub period_start: String,
    /// Backtest period end, as reported
    pub period_end: String,
}

impl BacktestMetrics {
    /// Extract metrics from a strategy record, applying alias fallbacks,
    /// zero defaults, and unit normalization.
    pub fn from_record(record: &Value) -> Self {
        let total_trades = field_u64(record, "total_trades");
        let wins = field_u64(record, "wins");
        let losses = field_u64(record, "losses");

        let raw_drawdown = field_f64(record, "max_drawdown")
            .or_else(|| field_f64(record, "max_drawdown_abs"))
            .unwrap_or(0.0);
        let profit_total = field_f64(record, "profit_total_abs")
            .or_else(|| field_f64(record, "profit_mean"))
            .unwrap_or(0.0);

        Self {
            total_trades,
            wins,
            losses,
            win_rate_pct: win_rate_pct(wins, total_trades),
            sortino: field_f64(record, "sortino").unwrap_or(0.0),
            max_drawdown_pct: normalize_drawdown_pct(raw_drawdown),
            profit_total,
            sharpe: field_f64(record, "sharpe").unwrap_or(0.0),
            period_start: field_str(record, "backtest_start"),
            period_end: field_str(record, "backtest_end"),
        }
    }
}

/// Win rate in percent; defined as 0 when there are no trades, never an error
pub fn win_rate_pct(wins: u64, total_trades: u64) -> f64 {
    if total_trades > 0 {
        wins as f64 / total_trades as f64 * 100.0
    } else {
        0.0
    }
}

/// Reconcile a drawdown value to percent.
///
/// Result records store drawdown either as a fraction (magnitude below 1)
/// or already as a percentage; fractions are scaled by 100. Idempotent for
/// values already in percent.
pub fn normalize_drawdown_pct(raw: f64) -> f64 {
    if raw.abs() < 1.0 {
        raw * 100.0
    } else {
        raw
    }
}

fn field_f64(record: &Value, name: &str) -> Option<f64> {
    record.get(name).and_then(Value::as_f64)
}

fn field_u64(record: &Value, name: &str) -> u64 {
    record.get(name).and_then(Value::as_u64).unwrap_or(0)
}

fn field_str(record: &Value, name: &str) -> String {
    record
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or("?")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_with_all_fields() {
        let record = json!({
            "total_trades": 50,
            "wins": 30,
            "losses": 20,
            "sortino": 2.1,
            "max_drawdown": 0.12,
            "profit_total_abs": 14.2,
            "sharpe": 1.8,
            "backtest_start": "2024-01-01",
            "backtest_end": "2024-06-30",
        });

        let m = BacktestMetrics::from_record(&record);
        assert_eq!(m.total_trades, 50);
        assert_eq!(m.win_rate_pct, 60.0);
        assert_eq!(m.max_drawdown_pct, 12.0);
        assert_eq!(m.profit_total, 14.2);
        assert_eq!(m.period_start, "2024-01-01");
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let m = BacktestMetrics::from_record(&json!({}));
        assert_eq!(m.total_trades, 0);
        assert_eq!(m.sortino, 0.0);
        assert_eq!(m.max_drawdown_pct, 0.0);
        assert_eq!(m.win_rate_pct, 0.0);
        assert_eq!(m.period_start, "?");
    }

    #[test]
    fn test_alias_fallbacks() {
        let record = json!({
            "max_drawdown_abs": 8.5,
            "profit_mean": 0.4,
        });
        let m = BacktestMetrics::from_record(&record);
        assert_eq!(m.max_drawdown_pct, 8.5);
        assert_eq!(m.profit_total, 0.4);
    }

    #[test]
    fn test_primary_field_wins_over_alias() {
        let record = json!({
            "max_drawdown": 0.15,
            "max_drawdown_abs": 500.0,
        });
        let m = BacktestMetrics::from_record(&record);
        assert_eq!(m.max_drawdown_pct, 15.0);
    }

    #[test]
    fn test_win_rate_zero_trades() {
        assert_eq!(win_rate_pct(0, 0), 0.0);
        assert_eq!(win_rate_pct(5, 0), 0.0);
    }

    #[test]
    fn test_drawdown_normalization() {
        assert_eq!(normalize_drawdown_pct(0.12), 12.0);
        assert_eq!(normalize_drawdown_pct(12.0), 12.0);
        assert_eq!(normalize_drawdown_pct(-0.5), -50.0);
        assert_eq!(normalize_drawdown_pct(0.0), 0.0);
    }

    #[test]
    fn test_drawdown_normalization_idempotent_in_percent() {
        for x in [1.0, 5.0, 20.0, 99.9] {
            assert_eq!(
                normalize_drawdown_pct(normalize_drawdown_pct(x)),
                normalize_drawdown_pct(x)
            );
        }
    }
}
