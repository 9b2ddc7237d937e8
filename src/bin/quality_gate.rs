//! Quality gate CLI — validates a backtest result file against minimum
//! quality thresholds before allowing deployment.
//!
//! Exits 0 if the model passes every check, 1 if any check fails or the
//! input is missing/malformed.
//!
//! ```text
//! quality_gate /path/to/last_backtest.json
//! quality_gate /path/to/last_backtest.json --sortino 2.0 --drawdown 15
//! ```

use clap::Parser;
use signal_trader::config::{
    Thresholds, DEFAULT_MAX_DRAWDOWN_PCT, DEFAULT_MIN_SORTINO, DEFAULT_MIN_TRADES,
    DEFAULT_MIN_WIN_RATE_PCT,
};
use signal_trader::gate::run_quality_gate;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "quality_gate",
    about = "Checks a backtest result JSON against minimum quality thresholds"
)]
struct Cli {
    /// Path to the backtest result JSON
    result_file: PathBuf,

    /// Minimum Sortino ratio
    #[arg(long, default_value_t = DEFAULT_MIN_SORTINO)]
    sortino: f64,

    /// Maximum drawdown, in percent
    #[arg(long, default_value_t = DEFAULT_MAX_DRAWDOWN_PCT)]
    drawdown: f64,

    /// Minimum number of trades
    #[arg(long, default_value_t = DEFAULT_MIN_TRADES)]
    min_trades: u64,

    /// Minimum win rate, in percent
    #[arg(long, default_value_t = DEFAULT_MIN_WIN_RATE_PCT)]
    win_rate: f64,

    /// Strategy name to check (defaults to the first in the file)
    #[arg(long)]
    strategy: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let thresholds = Thresholds {
        min_sortino: cli.sortino,
        max_drawdown_pct: cli.drawdown,
        min_trades: cli.min_trades,
        min_win_rate_pct: cli.win_rate,
    };

    match run_quality_gate(&cli.result_file, cli.strategy.as_deref(), &thresholds) {
        Ok(report) => {
            print!("{}", report.format());
            if report.passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("❌ {err}");
            ExitCode::FAILURE
        }
    }
}
