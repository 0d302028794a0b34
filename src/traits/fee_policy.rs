//! Fee policy seam.
//!
//! The swap engine asks a [`FeePolicy`] for the fee tier after every swap.
//! A policy is a pure function of the previous price, the price the swap
//! just observed, and the pool's base fee: it performs no I/O, keeps no
//! state between calls, and cannot fail.

use crate::domain::{BasisPoints, Price};

/// Decides the fee tier a pool carries after a swap.
///
/// # Contract
///
/// - Identical inputs always produce identical output.
/// - `last_price` is the price of the *previous* swap (zero before the
///   first one), so the policy measures the volatility of this swap
///   relative to history.
///
/// # Implementors
///
/// - [`VolatilityFeePolicy`](crate::fee::VolatilityFeePolicy): two tiers
///   selected by the absolute price move.
pub trait FeePolicy {
    /// Returns the fee tier for a swap that moved the price from
    /// `last_price` to `new_price`.
    #[must_use]
    fn compute_fee(&self, last_price: Price, new_price: Price, base_fee: BasisPoints) -> BasisPoints;
}
