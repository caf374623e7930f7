//! Fixed-scale arbitrary-precision decimal arithmetic.
//!
//! A [`Decimal`] is an unscaled `BigInt` together with a scale: its value is
//! `unscaled / 10^scale`. Addition, subtraction and multiplication are exact.
//! Division and rescaling take an explicit target scale and round half up
//! (ties away from zero).

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::DiceError;

/// Arbitrary-precision decimal number with an explicit scale.
///
/// Equality is representational: `6` and `6.00` are different values of the
/// type even though they compare as equal with [`Decimal::cmp_value`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    unscaled: BigInt,
    scale: u32,
}

/// 10^exp as a `BigInt`.
fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u32).pow(exp)
}

/// Integer division rounding half up.
fn div_round_half_up(num: &BigInt, den: &BigInt) -> BigInt {
    let (quotient, remainder) = num.div_rem(den);
    if remainder.is_zero() {
        return quotient;
    }
    if remainder.abs() * 2u32 >= den.abs() {
        if num.is_negative() == den.is_negative() {
            quotient + 1u32
        } else {
            quotient - 1u32
        }
    } else {
        quotient
    }
}

impl Decimal {
    /// Create a decimal from an unscaled integer and a scale.
    #[must_use]
    pub fn new(unscaled: BigInt, scale: u32) -> Self {
        Self { unscaled, scale }
    }

    /// The value zero at scale 0.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    /// The value one at scale 0.
    #[must_use]
    pub fn one() -> Self {
        Self::new(BigInt::one(), 0)
    }

    /// `base^exp` as an exact integer decimal.
    #[must_use]
    pub fn integer_pow(base: u32, exp: u32) -> Self {
        Self::new(BigInt::from(base).pow(exp), 0)
    }

    /// Number of fractional digits.
    #[must_use]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// The unscaled integer representation.
    #[must_use]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Whether the value is zero, at any scale.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Change the scale, rounding half up when digits are dropped.
    #[must_use]
    pub fn rescale(&self, scale: u32) -> Self {
        match scale.cmp(&self.scale) {
            Ordering::Equal => self.clone(),
            Ordering::Greater => Self::new(&self.unscaled * pow10(scale - self.scale), scale),
            Ordering::Less => Self::new(
                div_round_half_up(&self.unscaled, &pow10(self.scale - scale)),
                scale,
            ),
        }
    }

    /// Divide by `divisor`, rounding half up to `scale` fractional digits.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError::Arithmetic`] when `divisor` is zero.
    pub fn div_half_up(&self, divisor: &Self, scale: u32) -> Result<Self, DiceError> {
        if divisor.is_zero() {
            return Err(DiceError::Arithmetic(format!("division of {self} by zero")));
        }
        // (a / 10^sa) / (b / 10^sb) at scale s == a * 10^(sb + s) / (b * 10^sa)
        let num = &self.unscaled * pow10(divisor.scale + scale);
        let den = &divisor.unscaled * pow10(self.scale);
        Ok(Self::new(div_round_half_up(&num, &den), scale))
    }

    /// Compare by numeric value, ignoring scale.
    #[must_use]
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.rescale(scale).unscaled.cmp(&other.rescale(scale).unscaled)
    }

    /// Lossy conversion to `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }
}

impl From<u32> for Decimal {
    fn from(value: u32) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl From<BigInt> for Decimal {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

impl Add<&Decimal> for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: &Decimal) -> Decimal {
        let scale = self.scale.max(rhs.scale);
        Decimal::new(self.rescale(scale).unscaled + rhs.rescale(scale).unscaled, scale)
    }
}

impl Add for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Decimal) -> Decimal {
        &self + &rhs
    }
}

impl Sub<&Decimal> for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: &Decimal) -> Decimal {
        let scale = self.scale.max(rhs.scale);
        Decimal::new(self.rescale(scale).unscaled - rhs.rescale(scale).unscaled, scale)
    }
}

impl Sub for Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Decimal) -> Decimal {
        &self - &rhs
    }
}

impl Mul<&Decimal> for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: &Decimal) -> Decimal {
        Decimal::new(&self.unscaled * &rhs.unscaled, self.scale + rhs.scale)
    }
}

impl Mul for Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Decimal) -> Decimal {
        &self * &rhs
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.unscaled.is_negative() { "-" } else { "" };
        let digits = self.unscaled.abs().to_string();
        if self.scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        let scale = self.scale as usize;
        let padded = if digits.len() <= scale {
            format!("{}{digits}", "0".repeat(scale + 1 - digits.len()))
        } else {
            digits
        };
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        write!(f, "{sign}{int_part}.{frac_part}")
    }
}

impl FromStr for Decimal {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DiceError::InvalidArgument(format!("invalid decimal literal: {s:?}"));
        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        if int_part.is_empty()
            || !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let scale = u32::try_from(frac_part.len()).map_err(|_| invalid())?;
        let magnitude = BigInt::parse_bytes(format!("{int_part}{frac_part}").as_bytes(), 10)
            .ok_or_else(invalid)?;
        let unscaled = if negative { -magnitude } else { magnitude };
        Ok(Self::new(unscaled, scale))
    }
}
