//! CLI result presenter and run reporter.

use std::time::Duration;

use dicecalc_core::{Decimal, DiceError};
use dicecalc_orchestration::interfaces::{
    EstimateComparison, ResultPresenter, RunReport, RunReporter, RunResult,
};
use dicecalc_orchestration::orchestrator::cumulative_run_time;

use crate::output::{format_duration, format_millis, format_table_row};
use crate::ui::{print_header, print_status, Status};

/// Prints the start and end of every simulation run.
pub struct CLIRunReporter {
    quiet: bool,
}

impl CLIRunReporter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl RunReporter for CLIRunReporter {
    fn run_started(&self, index: usize) {
        if !self.quiet {
            println!("start time {index}");
        }
    }

    fn run_finished(&self, result: &RunResult) {
        match &result.outcome {
            Ok(summary) if self.quiet => println!("{}", summary.mean),
            // One println per run keeps the two lines together under parallel runs.
            Ok(summary) => println!(
                "Average number of rounds needed: {}\nrun time thread {}: {}",
                summary.mean,
                result.index,
                format_millis(result.duration)
            ),
            Err(e) => print_status(Status::Error, &format!("run {}: {e}", result.index)),
        }
    }
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_exact(&self, dice: u32, value: &Decimal, duration: Duration) {
        if self.quiet {
            println!("{value}");
            return;
        }

        println!("Calculated number of rounds needed for {dice} dice: {value}");
        if self.verbose {
            println!("Exact calculation took {}", format_duration(duration));
        }
        println!();
    }

    fn present_table(&self, table: &[(u32, Decimal)], duration: Duration) {
        if !self.quiet {
            print_header("Expected rounds");
        }
        for (dice, value) in table {
            println!("{}", format_table_row(*dice, value));
        }
        if self.verbose {
            println!("Table took {}", format_duration(duration));
        }
        if !self.quiet {
            println!();
        }
    }

    fn present_report(&self, report: &RunReport) {
        if self.quiet {
            return;
        }

        println!("run time: {}", format_millis(report.total_duration));
        if self.verbose {
            println!(
                "cumulative run time: {} over {} runs",
                format_millis(cumulative_run_time(report)),
                report.runs.len()
            );
        }
    }

    fn present_comparison(&self, comparison: &EstimateComparison) {
        if self.quiet {
            return;
        }

        println!();
        print_header("Cross-validation");
        println!("  Exact:          {:.10}", comparison.exact);
        println!("  Pooled mean:    {:.10}", comparison.pooled_mean);
        println!("  Deviation:      {:.10}", comparison.deviation);
        println!(
            "  Run means:      {:.6} .. {:.6} (std dev {:.6}, {} runs)",
            comparison.min_mean, comparison.max_mean, comparison.run_std_dev, comparison.valid_runs
        );
        print_status(Status::Ok, "simulated estimate agrees with the exact value");
    }

    fn present_error(&self, error: &DiceError) {
        print_status(error_status(error), &error.to_string());
    }
}

/// A statistical mismatch is a warning; everything else is an error.
#[must_use]
pub fn error_status(error: &DiceError) -> Status {
    match error {
        DiceError::Mismatch { .. } => Status::Warn,
        _ => Status::Error,
    }
}
