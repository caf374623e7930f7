//! Precision and simulation options.

use crate::constants::{DEFAULT_DECIMALS, DEFAULT_NUMBER_OF_RUNS, DEFAULT_TOTAL_NUMBER_OF_TRIES};
use crate::error::DiceError;
use crate::rng::derive_seed;

/// Decimal precision of the exact calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    /// Fractional digits of reported results.
    pub decimals: u32,
    /// Extra fractional digits kept in the memo table.
    ///
    /// Zero keeps memo entries at `decimals`, which reproduces the
    /// published 50-digit values digit for digit.
    pub guard_digits: u32,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            guard_digits: 0,
        }
    }
}

impl Precision {
    /// Precision with the given number of fractional digits and no guard digits.
    #[must_use]
    pub fn new(decimals: u32) -> Self {
        Self {
            decimals,
            guard_digits: 0,
        }
    }

    /// Set the number of guard digits.
    #[must_use]
    pub fn with_guard_digits(mut self, guard_digits: u32) -> Self {
        self.guard_digits = guard_digits;
        self
    }

    /// Scale used for divisions and memo entries.
    #[must_use]
    pub fn working_scale(&self) -> u32 {
        self.decimals.saturating_add(self.guard_digits)
    }
}

/// Options for the Monte Carlo simulation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOptions {
    /// Trials per run.
    pub trials: u64,
    /// Independent runs to execute and time.
    pub runs: usize,
    /// Base seed; `None` seeds every run from OS entropy.
    pub seed: Option<u64>,
    /// Execute runs concurrently on the rayon pool.
    pub parallel_runs: bool,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TOTAL_NUMBER_OF_TRIES,
            runs: DEFAULT_NUMBER_OF_RUNS,
            seed: None,
            parallel_runs: true,
        }
    }
}

impl SimulationOptions {
    /// Check that trial and run counts are positive.
    pub fn validate(&self) -> Result<(), DiceError> {
        if self.trials < 1 {
            return Err(DiceError::InvalidArgument(format!(
                "number of trials must be at least 1, got {}",
                self.trials
            )));
        }
        if self.runs < 1 {
            return Err(DiceError::InvalidArgument(format!(
                "number of runs must be at least 1, got {}",
                self.runs
            )));
        }
        Ok(())
    }

    /// Seed for the run with the given index.
    #[must_use]
    pub fn run_seed(&self, run: usize) -> Option<u64> {
        self.seed.map(|seed| derive_seed(seed, run as u64))
    }
}
