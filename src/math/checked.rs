//! Checked arithmetic that reports failures as [`AmmError`].
//!
//! Domain types expose `Option`-returning `checked_*` methods; this trait
//! lifts them into `Result` with a specific error variant per failure so
//! the swap engine can propagate them with `?`.
//!
//! # Examples
//!
//! ```
//! use dynfee_amm::domain::{Amount, Rounding};
//! use dynfee_amm::math::CheckedArithmetic;
//!
//! let k = Amount::new(1_000).safe_mul(&Amount::new(2_000)).expect("fits");
//! let y = k.safe_div(&Amount::new(1_500), Rounding::Down).expect("non-zero");
//! assert_eq!(y, Amount::new(1_333));
//! ```

use crate::domain::{Amount, Rounding};
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead of clamping.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] on overflow.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] on overflow.
    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked division with explicit [`Rounding`] direction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_mul(other)
            .ok_or(AmmError::Overflow("amount multiplication overflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError> {
        self.checked_div(other, rounding)
            .ok_or(AmmError::DivisionByZero)
    }
}
