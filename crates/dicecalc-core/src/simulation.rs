//! Monte Carlo estimate of the expected number of rounds.

use std::sync::atomic::{AtomicU64, Ordering};

use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::constants::TRIALS_PER_CHUNK;
use crate::error::DiceError;
use crate::observer::ProgressObserver;
use crate::observers::NoOpObserver;
use crate::progress::ProgressUpdate;
use crate::rng::{derive_seed, DiceRng};

const SOURCE: &str = "simulation";

/// Outcome of one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSummary {
    /// Dice thrown in the first round of every trial.
    pub dice: u32,
    /// Number of trials.
    pub trials: u64,
    /// Sum of the rounds taken by all trials.
    pub total_rounds: u64,
    /// Average rounds per trial.
    pub mean: f64,
}

impl SimulationSummary {
    #[allow(clippy::cast_precision_loss)]
    fn from_totals(dice: u32, trials: u64, total_rounds: u64) -> Self {
        Self {
            dice,
            trials,
            total_rounds,
            mean: total_rounds as f64 / trials as f64,
        }
    }
}

/// Play one trial: roll until every die has shown a six. Returns the rounds taken.
pub fn run_trial(dice: u32, rng: &mut DiceRng) -> u64 {
    let mut in_play = dice;
    let mut rounds = 0;
    while in_play > 0 {
        rounds += 1;
        in_play -= rng.roll_and_count_targets(in_play);
    }
    rounds
}

/// Add the rounds of one trial or chunk to a running total.
///
/// # Errors
///
/// Returns [`DiceError::Config`] when the total no longer fits in a `u64`,
/// which only an absurd trial count can cause.
pub fn add_rounds(total: u64, rounds: u64) -> Result<u64, DiceError> {
    total.checked_add(rounds).ok_or_else(|| {
        DiceError::Config(format!(
            "total rounds overflowed after {total} rounds; reduce the number of trials"
        ))
    })
}

/// Runs independent trials in parallel chunks, one RNG per chunk.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonteCarloSimulator {
    seed: Option<u64>,
}

impl MonteCarloSimulator {
    /// Simulator seeded from `seed`, or from OS entropy when `None`.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    /// Base seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Average rounds over `trials` trials of `dice` dice.
    pub fn simulate_average_rounds(&self, dice: u32, trials: u64) -> Result<f64, DiceError> {
        Ok(self.simulate(dice, trials)?.mean)
    }

    /// Run `trials` trials of `dice` dice.
    pub fn simulate(&self, dice: u32, trials: u64) -> Result<SimulationSummary, DiceError> {
        self.simulate_with_observer(dice, trials, &NoOpObserver::new())
    }

    /// Run the trials, reporting one update per finished chunk.
    pub fn simulate_with_observer(
        &self,
        dice: u32,
        trials: u64,
        observer: &dyn ProgressObserver,
    ) -> Result<SimulationSummary, DiceError> {
        DiceError::check_dice(dice)?;
        if trials < 1 {
            return Err(DiceError::InvalidArgument(format!(
                "number of trials must be at least 1, got {trials}"
            )));
        }

        let chunks = trials.div_ceil(TRIALS_PER_CHUNK);
        let finished = AtomicU64::new(0);
        let total_rounds = (0..chunks)
            .into_par_iter()
            .map(|chunk| -> Result<u64, DiceError> {
                let start = chunk * TRIALS_PER_CHUNK;
                let len = TRIALS_PER_CHUNK.min(trials - start);
                let mut rng =
                    DiceRng::from_optional_seed(self.seed.map(|seed| derive_seed(seed, chunk)));
                let rounds = (0..len)
                    .try_fold(0, |acc, _| add_rounds(acc, run_trial(dice, &mut rng)))?;

                let done = finished.fetch_add(1, Ordering::Relaxed) + 1;
                observer.on_progress(&ProgressUpdate::new(SOURCE, done, chunks));
                Ok(rounds)
            })
            .try_reduce(|| 0, add_rounds)?;

        observer.on_progress(&ProgressUpdate::done(SOURCE, chunks));
        Ok(SimulationSummary::from_totals(dice, trials, total_rounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_totals_are_checked() {
        assert_eq!(add_rounds(40, 2), Ok(42));
        assert_eq!(add_rounds(u64::MAX - 1, 1), Ok(u64::MAX));
        assert!(matches!(add_rounds(u64::MAX, 1), Err(DiceError::Config(_))));
    }

    #[test]
    fn rejects_invalid_arguments() {
        let sim = MonteCarloSimulator::new(Some(1));
        assert!(matches!(
            sim.simulate(0, 10),
            Err(DiceError::InvalidArgument(_))
        ));
        assert!(matches!(
            sim.simulate(3, 0),
            Err(DiceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn every_trial_takes_at_least_one_round() {
        let mut rng = DiceRng::from_seed(3);
        for dice in 1..20 {
            assert!(run_trial(dice, &mut rng) >= 1);
        }
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let a = MonteCarloSimulator::new(Some(42)).simulate(5, 20_000).unwrap();
        let b = MonteCarloSimulator::new(Some(42)).simulate(5, 20_000).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.trials, 20_000);
    }

    #[test]
    fn single_die_converges_to_six() {
        let mean = MonteCarloSimulator::new(Some(11))
            .simulate_average_rounds(1, 200_000)
            .unwrap();
        assert!((mean - 6.0).abs() < 0.1, "mean = {mean}");
    }

    #[test]
    fn two_dice_converge_to_exact_value() {
        let exact = 96.0 / 11.0;
        let mean = MonteCarloSimulator::new(Some(2024))
            .simulate_average_rounds(2, 100_000)
            .unwrap();
        assert!((mean - exact).abs() < 0.1, "mean = {mean}");
    }

    #[test]
    fn partial_last_chunk_is_counted() {
        let summary = MonteCarloSimulator::new(Some(5))
            .simulate(1, TRIALS_PER_CHUNK + 3)
            .unwrap();
        assert_eq!(summary.trials, TRIALS_PER_CHUNK + 3);
        assert!(summary.total_rounds >= summary.trials);
    }
}
