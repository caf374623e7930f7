//! # dicecalc-core
//!
//! How many rounds does it take to roll all of N dice to six, rerolling only
//! the dice that have not shown a six yet? This crate answers exactly, with a
//! memoised recurrence in arbitrary-precision decimal arithmetic, and
//! empirically, with a Monte Carlo simulation.

pub mod binomial;
pub mod constants;
pub mod decimal;
pub mod error;
pub mod expectation;
pub mod memo;
pub mod observer;
pub mod observers;
pub mod options;
pub mod progress;
pub mod rng;
pub mod simulation;

use std::sync::OnceLock;

// Re-exports
pub use constants::{
    exit_codes, DEFAULT_DECIMALS, DEFAULT_NUMBER_OF_DICE, DEFAULT_NUMBER_OF_RUNS,
    DEFAULT_TOLERANCE, DEFAULT_TOTAL_NUMBER_OF_TRIES, REFERENCE_TABLE,
};
pub use decimal::Decimal;
pub use error::DiceError;
pub use expectation::ExpectationCalculator;
pub use observer::ProgressObserver;
pub use options::{Precision, SimulationOptions};
pub use progress::ProgressUpdate;
pub use simulation::{MonteCarloSimulator, SimulationSummary};

static DEFAULT_CALCULATOR: OnceLock<ExpectationCalculator> = OnceLock::new();

/// Expected rounds for `n` dice with the default precision (50 decimals).
///
/// Backed by a process-wide calculator whose memo table starts empty, only
/// grows, and lives until the process exits.
///
/// # Example
/// ```
/// let e = dicecalc_core::expected_rounds(1).unwrap();
/// assert!(e.to_string().starts_with("6.000"));
/// assert!(dicecalc_core::expected_rounds(0).is_err());
/// ```
pub fn expected_rounds(n: u32) -> Result<Decimal, DiceError> {
    DEFAULT_CALCULATOR
        .get_or_init(ExpectationCalculator::default)
        .expected_rounds(n)
}
