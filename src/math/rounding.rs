//! Rounding helpers for integer division.
//!
//! [`div_round`] is the single place where the crate divides `u128`
//! values.  It backs [`Amount::checked_div`](crate::domain::Amount::checked_div),
//! [`Price::from_ratio`](crate::domain::Price::from_ratio) and
//! [`BasisPoints::apply`](crate::domain::BasisPoints::apply).
//!
//! # Convention
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Output reserve (informational fee mode) | [`Rounding::Down`] |
//! | Output reserve (deducted fee mode) | [`Rounding::Up`] |
//! | Observed price | [`Rounding::Down`] |
//! | Fee amount | [`Rounding::Up`] |
//!
//! # Examples
//!
//! ```
//! use dynfee_amm::domain::Rounding;
//! use dynfee_amm::math::div_round;
//!
//! assert_eq!(div_round(2_000_000, 1_500, Rounding::Down), Some(1_333));
//! assert_eq!(div_round(2_000_000, 1_500, Rounding::Up), Some(1_334));
//! assert_eq!(div_round(10, 0, Rounding::Down), None);
//! ```

use crate::domain::Rounding;

/// Integer division of `u128` values with explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let q = numerator / denominator;
    match rounding {
        Rounding::Down => Some(q),
        // q + 1 cannot overflow: a non-zero remainder implies denominator > 1.
        Rounding::Up if numerator % denominator != 0 => Some(q + 1),
        Rounding::Up => Some(q),
    }
}
