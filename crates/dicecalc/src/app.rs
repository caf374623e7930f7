//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::debug;

use dicecalc_cli::output::write_to_file;
use dicecalc_cli::presenter::{CLIResultPresenter, CLIRunReporter};
use dicecalc_core::observer::ProgressObserver;
use dicecalc_core::observers::{LoggingObserver, NoOpObserver};
use dicecalc_core::ExpectationCalculator;
use dicecalc_orchestration::interfaces::ResultPresenter;
use dicecalc_orchestration::orchestrator::{analyze_estimates, execute_runs};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        dicecalc_cli::completion::write_completion(&mut cmd, shell, &mut std::io::stdout())
            .context("writing completion script")?;
        return Ok(());
    }

    // Fail fast on invalid configuration
    let plan = config.plan().context("invalid configuration")?;
    debug!(?plan, "validated configuration");

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    let observer: Box<dyn ProgressObserver> = if config.verbose {
        Box::new(LoggingObserver::new())
    } else {
        Box::new(NoOpObserver::new())
    };

    // Exact value
    let calculator = ExpectationCalculator::new(plan.precision);
    let start = Instant::now();
    let exact = calculator.expected_rounds_with_observer(plan.dice, observer.as_ref())?;
    if config.table {
        let table = calculator.expected_rounds_table(plan.dice)?;
        presenter.present_table(&table, start.elapsed());
    } else {
        presenter.present_exact(plan.dice, &exact, start.elapsed());
    }

    if let Some(ref path) = config.output {
        write_to_file(path, &exact).with_context(|| format!("writing result to {path}"))?;
    }

    if config.exact_only {
        return Ok(());
    }

    // Simulation runs
    let reporter = CLIRunReporter::new(config.quiet);
    let report = execute_runs(plan.dice, &plan.simulation, &reporter)?;
    presenter.present_report(&report);

    match analyze_estimates(&exact, &report.runs, plan.tolerance) {
        Ok(comparison) => presenter.present_comparison(&comparison),
        Err(e) => presenter.present_error(&e),
    }

    Ok(())
}
