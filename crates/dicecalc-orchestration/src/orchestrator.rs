//! Core orchestration: timed simulation runs and cross-validation.

use std::time::{Duration, Instant};

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{info, warn};

use dicecalc_core::{Decimal, DiceError, MonteCarloSimulator, SimulationOptions};

use crate::interfaces::{EstimateComparison, RunReport, RunReporter, RunResult};

/// Execute `opts.runs` independent simulation runs of `dice` dice.
///
/// Runs execute on the rayon pool unless `opts.parallel_runs` is false.
/// Results are returned ordered by run index.
///
/// # Errors
///
/// [`DiceError::InvalidArgument`] for a dice, trial or run count below one,
/// before any run starts.
pub fn execute_runs(
    dice: u32,
    opts: &SimulationOptions,
    reporter: &dyn RunReporter,
) -> Result<RunReport, DiceError> {
    DiceError::check_dice(dice)?;
    opts.validate()?;

    let start = Instant::now();
    let runs: Vec<RunResult> = if opts.parallel_runs && opts.runs > 1 {
        (0..opts.runs)
            .into_par_iter()
            .map(|index| execute_run(index, dice, opts, reporter))
            .collect()
    } else {
        (0..opts.runs)
            .map(|index| execute_run(index, dice, opts, reporter))
            .collect()
    };

    Ok(RunReport {
        dice,
        runs,
        total_duration: start.elapsed(),
    })
}

fn execute_run(
    index: usize,
    dice: u32,
    opts: &SimulationOptions,
    reporter: &dyn RunReporter,
) -> RunResult {
    reporter.run_started(index);
    let start = Instant::now();
    let outcome = MonteCarloSimulator::new(opts.run_seed(index)).simulate(dice, opts.trials);
    let result = RunResult {
        index,
        outcome,
        duration: start.elapsed(),
    };
    match &result.outcome {
        Ok(summary) => info!(run = index, mean = summary.mean, elapsed = ?result.duration, "run finished"),
        Err(e) => warn!(run = index, error = %e, "run failed"),
    }
    reporter.run_finished(&result);
    result
}

/// Compare the pooled simulated estimate with the exact expectation.
///
/// # Errors
///
/// - [`DiceError::Config`] for a negative or non-finite tolerance.
/// - [`DiceError::InvalidArgument`] when no run succeeded.
/// - [`DiceError::Mismatch`] when the pooled mean deviates by more than `tolerance`.
#[allow(clippy::cast_precision_loss)]
pub fn analyze_estimates(
    exact: &Decimal,
    runs: &[RunResult],
    tolerance: f64,
) -> Result<EstimateComparison, DiceError> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(DiceError::Config(format!("invalid tolerance: {tolerance}")));
    }
    let summaries: Vec<_> = runs.iter().filter_map(|r| r.outcome.as_ref().ok()).collect();
    if summaries.is_empty() {
        return Err(DiceError::InvalidArgument("no successful simulation runs".into()));
    }

    let trials: u64 = summaries.iter().map(|s| s.trials).sum();
    let rounds: u64 = summaries.iter().map(|s| s.total_rounds).sum();
    let pooled_mean = rounds as f64 / trials as f64;
    let exact = exact.to_f64();

    let means: Vec<f64> = summaries.iter().map(|s| s.mean).collect();
    let min_mean = means.iter().copied().fold(f64::INFINITY, f64::min);
    let max_mean = means.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let run_std_dev = if means.len() < 2 {
        0.0
    } else {
        let avg = means.iter().sum::<f64>() / means.len() as f64;
        let var = means.iter().map(|m| (m - avg).powi(2)).sum::<f64>() / (means.len() - 1) as f64;
        var.sqrt()
    };

    let deviation = (pooled_mean - exact).abs();
    if deviation > tolerance {
        return Err(DiceError::Mismatch {
            estimate: pooled_mean,
            exact,
            tolerance,
        });
    }

    Ok(EstimateComparison {
        exact,
        pooled_mean,
        deviation,
        min_mean,
        max_mean,
        run_std_dev,
        valid_runs: summaries.len(),
    })
}

/// Sum of the individual run durations (CPU-side work, not wall-clock).
#[must_use]
pub fn cumulative_run_time(report: &RunReport) -> Duration {
    report.runs.iter().map(|r| r.duration).sum()
}
