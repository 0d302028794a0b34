//! Fixed-point exchange rate.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::AmmError;

/// Default multiplier used to represent a fractional rate as an integer.
pub const DEFAULT_PRICE_SCALE: u128 = 1_000_000;

/// An exchange rate stored as an integer scaled by the pool's price scale.
///
/// A swap of `amount_in` for `amount_out` observes the price
/// `floor(amount_in * scale / amount_out)`, i.e. units of input paid per
/// unit of output.  No floating point is involved, so identical inputs
/// produce identical prices on every platform.
///
/// # Examples
///
/// ```
/// use dynfee_amm::domain::{Amount, Price, DEFAULT_PRICE_SCALE};
///
/// let p = Price::from_ratio(Amount::new(500), Amount::new(667), DEFAULT_PRICE_SCALE)
///     .expect("non-zero denominator");
/// assert_eq!(p.get(), 749_625);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Price(u128);

impl Price {
    /// Price of zero; the value a pool carries before its first swap.
    pub const ZERO: Self = Self(0);

    /// Creates a `Price` from an already-scaled raw value.
    #[must_use]
    pub const fn new(scaled: u128) -> Self {
        Self(scaled)
    }

    /// Returns the scaled raw value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Computes `floor(numerator * scale / denominator)`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    /// - [`AmmError::Overflow`] if `numerator * scale` overflows `u128`.
    pub fn from_ratio(numerator: Amount, denominator: Amount, scale: u128) -> crate::error::Result<Self> {
        if denominator.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        let scaled = numerator
            .get()
            .checked_mul(scale)
            .ok_or(AmmError::Overflow("price numerator overflow"))?;
        crate::math::div_round(scaled, denominator.get(), Rounding::Down)
            .map(Self)
            .ok_or(AmmError::DivisionByZero)
    }

    /// Absolute distance between two prices; never underflows.
    #[must_use]
    pub const fn abs_diff(&self, other: &Self) -> u128 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
