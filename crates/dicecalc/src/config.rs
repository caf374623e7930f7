//! Application configuration from CLI flags and environment.

use clap::Parser;

use dicecalc_core::constants::MAX_TRIALS;
use dicecalc_core::{DiceError, Precision, SimulationOptions};

/// dicecalc: expected rounds to roll every die to six, rerolling only the
/// dice that have not shown a six yet.
#[derive(Parser, Debug)]
#[command(name = "dicecalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Number of dice thrown in the first round.
    #[arg(
        short = 'n',
        long,
        default_value = "50",
        env = "NUMBER_OF_DICE",
        allow_negative_numbers = true
    )]
    pub dice: i64,

    /// Trials per simulation run.
    #[arg(
        short,
        long,
        default_value = "100000",
        env = "TOTAL_NUMBER_OF_TRIES",
        allow_negative_numbers = true
    )]
    pub trials: i64,

    /// Fractional digits of the exact result.
    #[arg(short, long, default_value = "50", env = "DECIMALS")]
    pub decimals: u32,

    /// Number of simulation runs to execute and time.
    #[arg(
        short,
        long,
        default_value = "20",
        env = "NUMBER_OF_RUNS",
        allow_negative_numbers = true
    )]
    pub runs: i64,

    /// Extra working digits kept in the memo table.
    #[arg(long, default_value = "0", env = "DICECALC_GUARD_DIGITS")]
    pub guard_digits: u32,

    /// Base seed for reproducible simulation runs.
    #[arg(long, env = "DICECALC_SEED")]
    pub seed: Option<u64>,

    /// Run the simulation runs one after another.
    #[arg(long)]
    pub sequential: bool,

    /// Allowed absolute deviation of the pooled simulated mean.
    #[arg(long, default_value = "0.1", allow_negative_numbers = true)]
    pub tolerance: f64,

    /// Only compute the exact value; skip the simulation.
    #[arg(long)]
    pub exact_only: bool,

    /// Print E(1) through E(N) instead of E(N) alone.
    #[arg(long)]
    pub table: bool,

    /// Write the exact value to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (only output the numbers).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Validated settings for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RunPlan {
    /// Dice pool size.
    pub dice: u32,
    /// Precision of the exact calculation.
    pub precision: Precision,
    /// Simulation settings.
    pub simulation: SimulationOptions,
    /// Allowed deviation of the pooled estimate.
    pub tolerance: f64,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validate every setting before any computation starts.
    pub fn plan(&self) -> Result<RunPlan, DiceError> {
        let dice = u32::try_from(positive("number of dice", self.dice)?).map_err(|_| {
            DiceError::InvalidArgument(format!("number of dice too large: {}", self.dice))
        })?;
        let trials = positive("number of trials", self.trials)?;
        if trials > MAX_TRIALS {
            return Err(DiceError::Config(format!(
                "number of trials must be at most {MAX_TRIALS}, got {trials}"
            )));
        }
        let runs = usize::try_from(positive("number of runs", self.runs)?).map_err(|_| {
            DiceError::InvalidArgument(format!("number of runs too large: {}", self.runs))
        })?;
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(DiceError::Config(format!(
                "tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }

        Ok(RunPlan {
            dice,
            precision: Precision::new(self.decimals).with_guard_digits(self.guard_digits),
            simulation: SimulationOptions {
                trials,
                runs,
                seed: self.seed,
                parallel_runs: !self.sequential,
            },
            tolerance: self.tolerance,
        })
    }
}

/// Require `value >= 1`.
fn positive(name: &str, value: i64) -> Result<u64, DiceError> {
    u64::try_from(value)
        .ok()
        .filter(|&v| v >= 1)
        .ok_or_else(|| DiceError::InvalidArgument(format!("{name} must be at least 1, got {value}")))
}
