//! Gate report formatting

use crate::gate::BacktestMetrics;

/// Status kind for one report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Check passed
    Pass,
    /// Check failed
    Fail,
    /// Informational line
    Info,
}

impl Status {
    /// ANSI-styled marker for terminal output
    pub fn marker(self) -> &'static str {
        match self {
            Status::Pass => "\x1b[92m✅ PASS\x1b[0m",
            Status::Fail => "\x1b[91m❌ FAIL\x1b[0m",
            Status::Info => "\x1b[94mℹ️  INFO\x1b[0m",
        }
    }
}

/// Comparison direction of a threshold check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
    /// Value must be at least the threshold
    Min,
    /// Value must be at most the threshold
    Max,
}

/// One evaluated threshold check
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Human-readable metric label
    pub label: &'static str,
    /// Observed value
    pub value: f64,
    /// Configured threshold
    pub threshold: f64,
    /// Comparison direction
    pub mode: CheckMode,
    /// Unit suffix appended to values (e.g. "%")
    pub unit: &'static str,
    /// Whether the check held
    pub passed: bool,
}

impl CheckOutcome {
    /// Evaluate one check
    pub fn evaluate(
        label: &'static str,
        value: f64,
        threshold: f64,
        mode: CheckMode,
        unit: &'static str,
    ) -> Self {
        let passed = match mode {
            CheckMode::Min => value >= threshold,
            CheckMode::Max => value <= threshold,
        };
        Self {
            label,
            value,
            threshold,
            mode,
            unit,
            passed,
        }
    }

    fn status(&self) -> Status {
        if self.passed {
            Status::Pass
        } else {
            Status::Fail
        }
    }

    fn format_line(&self) -> String {
        let comp = match self.mode {
            CheckMode::Min => ">=",
            CheckMode::Max => "<=",
        };
        format!(
            "  {}  {}: {:.2}{}  (required: {} {}{})",
            self.status().marker(),
            self.label,
            self.value,
            self.unit,
            comp,
            self.threshold,
            self.unit,
        )
    }
}

/// Full gate verdict for one strategy
#[derive(Debug, Clone)]
pub struct GateReport {
    /// Strategy identifier the gate resolved
    pub strategy: String,
    /// Extracted and normalized metrics
    pub metrics: BacktestMetrics,
    /// The four threshold checks
    pub checks: Vec<CheckOutcome>,
}

impl GateReport {
    /// Overall verdict: pass iff every check held
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Number of failed checks
    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }

    /// Format the report for terminal output
    pub fn format(&self) -> String {
        let info = Status::Info.marker();
        let m = &self.metrics;

        let mut out = String::new();
        out.push_str(&format!("\n{}\n", "=".repeat(50)));
        out.push_str(&format!("  Quality Gate — {}\n", self.strategy));
        out.push_str(&format!("{}\n", "=".repeat(50)));
        out.push_str(&format!(
            "  {info}  Period: {} → {}\n",
            m.period_start, m.period_end
        ));
        out.push_str(&format!(
            "  {info}  Trades: {}  |  Wins: {}  |  Losses: {}\n",
            m.total_trades, m.wins, m.losses
        ));
        out.push_str(&format!("  {info}  Total profit: {:.2}%\n", m.profit_total));
        out.push_str(&format!("  {info}  Sharpe: {:.2}\n\n", m.sharpe));

        for check in &self.checks {
            out.push_str(&check.format_line());
            out.push('\n');
        }
        out.push('\n');

        if self.passed() {
            out.push_str(&format!(
                "  {}  Model meets all quality thresholds. Deploying.\n",
                Status::Pass.marker()
            ));
        } else {
            out.push_str(&format!(
                "  {}  {} threshold(s) not met. Not deploying.\n",
                Status::Fail.marker(),
                self.failed_count()
            ));
        }
        out
    }
}
