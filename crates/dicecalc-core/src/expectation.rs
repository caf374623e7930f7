//! Exact expected number of rounds for a pool of dice.
//!
//! Every round, each in-play die is rolled and the dice showing a six leave
//! play. With E(0) = 0, conditioning on the `j` dice still in play after the
//! first round gives
//!
//! ```text
//! E(n) = [ 1 + 5^n + Σ_{j=1}^{n-1} (1 + E(j)) · C(n, n-j) · 5^j ] / (6^n − 5^n)
//! ```
//!
//! E(n) depends on every E(j) with j < n, so the memo table is filled bottom
//! up, E(1) first.

use crate::binomial::binomial;
use crate::constants::DIE_FACES;
use crate::decimal::Decimal;
use crate::error::DiceError;
use crate::memo::MemoTable;
use crate::observer::ProgressObserver;
use crate::observers::NoOpObserver;
use crate::options::Precision;
use crate::progress::ProgressUpdate;

const SOURCE: &str = "expectation";

/// One step of the recurrence: E(n) from `lower == [E(1), .., E(n-1)]`.
///
/// The final division rounds half up to `scale` fractional digits.
pub fn recurrence_step(n: u32, lower: &[Decimal], scale: u32) -> Result<Decimal, DiceError> {
    DiceError::check_dice(n)?;
    if lower.len() + 1 != n as usize {
        return Err(DiceError::InvalidArgument(format!(
            "E({n}) needs {} lower values, got {}",
            n - 1,
            lower.len()
        )));
    }
    let misses = DIE_FACES - 1;
    let one = Decimal::one();

    let mut numerator = &one + &Decimal::integer_pow(misses, n);
    for (j, lower_value) in (1..n).zip(lower) {
        let weight = &binomial(n, n - j)? * &Decimal::integer_pow(misses, j);
        numerator = &numerator + &(&(&one + lower_value) * &weight);
    }
    let denominator = &Decimal::integer_pow(DIE_FACES, n) - &Decimal::integer_pow(misses, n);
    numerator.div_half_up(&denominator, scale)
}

/// Exact expected-rounds calculator with its own memo table.
pub struct ExpectationCalculator {
    precision: Precision,
    memo: MemoTable,
}

impl ExpectationCalculator {
    /// Create a calculator with an empty memo table.
    #[must_use]
    pub fn new(precision: Precision) -> Self {
        Self {
            precision,
            memo: MemoTable::new(),
        }
    }

    /// Precision used by this calculator.
    #[must_use]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Expected number of rounds for `n` dice, with `decimals` fractional digits.
    ///
    /// # Errors
    ///
    /// [`DiceError::InvalidArgument`] if `n < 1`; the memo table is left untouched.
    pub fn expected_rounds(&self, n: u32) -> Result<Decimal, DiceError> {
        self.expected_rounds_with_observer(n, &NoOpObserver::new())
    }

    /// Like [`expected_rounds`](Self::expected_rounds), reporting one update
    /// per newly computed memo entry.
    pub fn expected_rounds_with_observer(
        &self,
        n: u32,
        observer: &dyn ProgressObserver,
    ) -> Result<Decimal, DiceError> {
        let scale = self.precision.working_scale();
        let total = u64::from(n);
        let value = self.memo.get_or_fill(
            n,
            |k, lower| recurrence_step(k, lower, scale),
            |k| observer.on_progress(&ProgressUpdate::new(SOURCE, u64::from(k), total)),
        )?;
        observer.on_progress(&ProgressUpdate::done(SOURCE, total));
        Ok(value.rescale(self.precision.decimals))
    }

    /// E(1)..=E(n) as `(dice, expected rounds)` pairs.
    pub fn expected_rounds_table(&self, n: u32) -> Result<Vec<(u32, Decimal)>, DiceError> {
        self.expected_rounds(n)?;
        Ok((1..)
            .zip(self.memo.prefix(n))
            .map(|(k, value)| (k, value.rescale(self.precision.decimals)))
            .collect())
    }

    /// Number of memoised dice counts.
    #[must_use]
    pub fn memoized_len(&self) -> usize {
        self.memo.len()
    }

    /// Number of memo entries computed so far.
    #[must_use]
    pub fn computations(&self) -> u64 {
        self.memo.computations()
    }
}

impl Default for ExpectationCalculator {
    fn default() -> Self {
        Self::new(Precision::default())
    }
}
