//! Fee policies.
//!
//! [`VolatilityFeePolicy`] is the default [`FeePolicy`](crate::traits::FeePolicy):
//! the base tier under normal conditions, base plus a surcharge when the
//! latest swap moved the price past a threshold.

mod volatility;

pub use volatility::{compute_fee, VolatilityFeePolicy};
