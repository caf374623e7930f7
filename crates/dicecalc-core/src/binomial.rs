//! Binomial coefficients in decimal arithmetic.

use crate::decimal::Decimal;
use crate::error::DiceError;

/// C(n, k) by the multiplicative formula, left to right.
///
/// Each step multiplies the running product by `n + 1 - i` and divides by `i`,
/// rounding half up at the product's scale. The running product stays an
/// integer, so the rounding never alters the value; it is kept so the
/// operation sequence matches the decimal recurrence it feeds.
///
/// Returns zero when `k > n`.
pub fn binomial(n: u32, k: u32) -> Result<Decimal, DiceError> {
    if k > n {
        return Ok(Decimal::zero());
    }
    let mut coefficient = Decimal::one();
    for i in 1..=k {
        let scaled = &coefficient * &Decimal::from(n + 1 - i);
        coefficient = scaled.div_half_up(&Decimal::from(i), scaled.scale())?;
    }
    Ok(coefficient)
}
