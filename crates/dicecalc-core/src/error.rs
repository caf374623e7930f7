//! Error type shared by the exact calculator and the simulator.

/// Error type for expected-rounds calculations and simulations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiceError {
    /// A dice count, trial count, or run count outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Decimal arithmetic fault. Indicates a logic defect, not bad input.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A simulated estimate strayed too far from the exact value.
    #[error(
        "simulated mean {estimate:.6} deviates from exact value {exact:.6} by more than {tolerance}"
    )]
    Mismatch {
        /// Pooled simulated mean.
        estimate: f64,
        /// Exact expectation, converted to `f64`.
        exact: f64,
        /// Allowed absolute deviation.
        tolerance: f64,
    },
}

impl DiceError {
    /// Reject dice counts below one.
    pub fn check_dice(n: u32) -> Result<(), Self> {
        if n < 1 {
            return Err(Self::InvalidArgument(format!(
                "number of dice must be at least 1, got {n}"
            )));
        }
        Ok(())
    }
}
