//! Backtest quality gate
//!
//! Consumes a completed backtest result artifact and decides whether the
//! model behind it may be deployed: Load → Resolve-Strategy →
//! Extract-Metrics → Normalize → Evaluate-Thresholds → Report. One
//! synchronous pass, idempotent per invocation; all errors are terminal.

pub mod metrics;
pub mod report;

pub use metrics::*;
pub use report::*;

use crate::config::Thresholds;
use serde_json::{Map, Value};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Terminal quality gate errors
#[derive(Debug, Error)]
pub enum GateError {
    /// The result artifact does not exist
    #[error("result file not found: {0}")]
    InputNotFound(String),
    /// The result artifact could not be read
    #[error("failed to read result file: {0}")]
    Io(#[from] std::io::Error),
    /// The result artifact is not valid JSON or lacks the expected shape
    #[error("invalid result file: {0}")]
    InputMalformed(String),
    /// The requested strategy has no record in the collection
    #[error("strategy '{name}' not found in results (available: {available:?})")]
    StrategyNotFound {
        /// Requested identifier
        name: String,
        /// Identifiers present in the artifact
        available: Vec<String>,
    },
}

/// Run the quality gate over a backtest result file.
///
/// `strategy` selects an explicit record; when absent, the first strategy in
/// the collection (insertion order) is used.
pub fn run_quality_gate(
    path: &Path,
    strategy: Option<&str>,
    thresholds: &Thresholds,
) -> Result<GateReport, GateError> {
    let strategies = load_results(path)?;
    let (name, record) = resolve_strategy(&strategies, strategy)?;
    debug!(strategy = %name, "resolved strategy record");

    let metrics = BacktestMetrics::from_record(record);
    let checks = evaluate_thresholds(&metrics, thresholds);

    Ok(GateReport {
        strategy: name,
        metrics,
        checks,
    })
}

/// Load the strategy collection from the result artifact.
///
/// The collection lives under the `"strategy"` key, falling back to
/// `"strategy_comparison"`. Extra top-level fields are ignored.
fn load_results(path: &Path) -> Result<Map<String, Value>, GateError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GateError::InputNotFound(path.display().to_string())
        } else {
            GateError::Io(e)
        }
    })?;

    let root: Value =
        serde_json::from_str(&text).map_err(|e| GateError::InputMalformed(e.to_string()))?;

    let collection = root
        .get("strategy")
        .or_else(|| root.get("strategy_comparison"));

    match collection {
        Some(Value::Object(map)) => Ok(map.clone()),
        Some(_) => Err(GateError::InputMalformed(
            "strategy collection is not an object".to_string(),
        )),
        None => Err(GateError::InputMalformed(
            "no strategy collection in result file".to_string(),
        )),
    }
}

/// Resolve which strategy record to gate
fn resolve_strategy<'a>(
    strategies: &'a Map<String, Value>,
    requested: Option<&str>,
) -> Result<(String, &'a Value), GateError> {
    let name = match requested {
        Some(name) => name.to_string(),
        None => strategies
            .keys()
            .next()
            .cloned()
            .ok_or_else(|| {
                GateError::InputMalformed("result file contains no strategy entries".to_string())
            })?,
    };

    match strategies.get(&name) {
        Some(record) => Ok((name, record)),
        None => Err(GateError::StrategyNotFound {
            name,
            available: strategies.keys().cloned().collect(),
        }),
    }
}

/// Evaluate the four independent threshold checks
fn evaluate_thresholds(metrics: &BacktestMetrics, thresholds: &Thresholds) -> Vec<CheckOutcome> {
    vec![
        CheckOutcome::evaluate(
            "Sortino ratio",
            metrics.sortino,
            thresholds.min_sortino,
            CheckMode::Min,
            "",
        ),
        CheckOutcome::evaluate(
            "Max drawdown",
            metrics.max_drawdown_pct,
            thresholds.max_drawdown_pct,
            CheckMode::Max,
            "%",
        ),
        CheckOutcome::evaluate(
            "Total trades",
            metrics.total_trades as f64,
            thresholds.min_trades as f64,
            CheckMode::Min,
            "",
        ),
        CheckOutcome::evaluate(
            "Win rate",
            metrics.win_rate_pct,
            thresholds.min_win_rate_pct,
            CheckMode::Min,
            "%",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strategies(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_resolve_first_strategy_by_insertion_order() {
        let map = strategies(json!({
            "Zeta": {"total_trades": 1},
            "Alpha": {"total_trades": 2},
        }));
        let (name, _) = resolve_strategy(&map, None).unwrap();
        assert_eq!(name, "Zeta");
    }

    #[test]
    fn test_resolve_explicit_strategy() {
        let map = strategies(json!({
            "Zeta": {"total_trades": 1},
            "Alpha": {"total_trades": 2},
        }));
        let (name, record) = resolve_strategy(&map, Some("Alpha")).unwrap();
        assert_eq!(name, "Alpha");
        assert_eq!(record.get("total_trades").unwrap().as_u64(), Some(2));
    }

    #[test]
    fn test_resolve_unknown_strategy_lists_available() {
        let map = strategies(json!({"LightGBM": {}}));
        let err = resolve_strategy(&map, Some("foo")).unwrap_err();
        match err {
            GateError::StrategyNotFound { name, available } => {
                assert_eq!(name, "foo");
                assert_eq!(available, vec!["LightGBM".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_empty_collection() {
        let map = Map::new();
        assert!(matches!(
            resolve_strategy(&map, None),
            Err(GateError::InputMalformed(_))
        ));
    }

    #[test]
    fn test_evaluate_thresholds_all_pass() {
        let metrics = BacktestMetrics::from_record(&json!({
            "total_trades": 50, "wins": 30, "losses": 20,
            "sortino": 2.1, "max_drawdown": 0.12,
        }));
        let checks = evaluate_thresholds(&metrics, &Thresholds::default());
        assert_eq!(checks.len(), 4);
        assert!(checks.iter().all(|c| c.passed));
    }

    #[test]
    fn test_evaluate_thresholds_sortino_fails() {
        let metrics = BacktestMetrics::from_record(&json!({
            "total_trades": 50, "wins": 30, "losses": 20,
            "sortino": 1.0, "max_drawdown": 0.12,
        }));
        let checks = evaluate_thresholds(&metrics, &Thresholds::default());
        assert_eq!(checks.iter().filter(|c| !c.passed).count(), 1);
        assert!(!checks[0].passed); // Sortino is the first check
    }
}
