//! # dicecalc-orchestration
//!
//! Timed, optionally parallel simulation runs and cross-validation of their
//! estimates against the exact expectation.

pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{ResultPresenter, RunReporter};
pub use orchestrator::{analyze_estimates, execute_runs};
