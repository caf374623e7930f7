//! Orchestration interfaces.

use std::time::Duration;

use dicecalc_core::{Decimal, DiceError, SimulationSummary};

/// Receives run lifecycle events; runs may finish in any order.
pub trait RunReporter: Send + Sync {
    /// A run is about to start.
    fn run_started(&self, index: usize);

    /// A run has finished, successfully or not.
    fn run_finished(&self, result: &RunResult);
}

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present the exact expectation for `dice` dice.
    fn present_exact(&self, dice: u32, value: &Decimal, duration: Duration);

    /// Present E(1)..=E(n).
    fn present_table(&self, table: &[(u32, Decimal)], duration: Duration);

    /// Present the timing summary of all runs.
    fn present_report(&self, report: &RunReport);

    /// Present the comparison of simulated estimates with the exact value.
    fn present_comparison(&self, comparison: &EstimateComparison);

    /// Present an error that did not stop the invocation, such as a failed
    /// cross-check or a run that produced no estimate.
    fn present_error(&self, error: &DiceError);
}

/// Result of a single simulation run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Run index, starting at 0.
    pub index: usize,
    /// The summary or a structured error.
    pub outcome: Result<SimulationSummary, DiceError>,
    /// Wall-clock duration of the run.
    pub duration: Duration,
}

/// All runs for one dice count.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Dice per trial.
    pub dice: u32,
    /// Results ordered by run index.
    pub runs: Vec<RunResult>,
    /// Wall-clock duration of all runs together.
    pub total_duration: Duration,
}

impl RunReport {
    /// Summaries of the successful runs.
    pub fn summaries(&self) -> impl Iterator<Item = &SimulationSummary> {
        self.runs.iter().filter_map(|r| r.outcome.as_ref().ok())
    }
}

/// Simulated estimates measured against the exact expectation.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateComparison {
    /// Exact expectation as `f64`.
    pub exact: f64,
    /// Mean over all trials of all successful runs.
    pub pooled_mean: f64,
    /// `|pooled_mean - exact|`.
    pub deviation: f64,
    /// Smallest run mean.
    pub min_mean: f64,
    /// Largest run mean.
    pub max_mean: f64,
    /// Sample standard deviation of the run means (0 for a single run).
    pub run_std_dev: f64,
    /// Number of successful runs.
    pub valid_runs: usize,
}

/// Null run reporter (does nothing).
pub struct NullRunReporter;

impl RunReporter for NullRunReporter {
    fn run_started(&self, _index: usize) {}
    fn run_finished(&self, _result: &RunResult) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_reporter() {
        let reporter = NullRunReporter;
        reporter.run_started(0);
        reporter.run_finished(&RunResult {
            index: 0,
            outcome: Err(DiceError::InvalidArgument("n".into())),
            duration: Duration::ZERO,
        });
    }

    #[test]
    fn report_summaries_skip_failures() {
        let report = RunReport {
            dice: 2,
            runs: vec![
                RunResult {
                    index: 0,
                    outcome: Ok(SimulationSummary {
                        dice: 2,
                        trials: 10,
                        total_rounds: 87,
                        mean: 8.7,
                    }),
                    duration: Duration::from_millis(3),
                },
                RunResult {
                    index: 1,
                    outcome: Err(DiceError::Arithmetic("x".into())),
                    duration: Duration::from_millis(1),
                },
            ],
            total_duration: Duration::from_millis(4),
        };
        assert_eq!(report.summaries().count(), 1);
    }
}
