//! Two-tier fee driven by the price move of the latest swap.

use crate::config::{FeePolicyConfig, DEFAULT_SURCHARGE_BPS, DEFAULT_VOLATILITY_THRESHOLD};
use crate::domain::{BasisPoints, Price};
use crate::traits::FeePolicy;

/// Charges `base_fee` normally and `base_fee + surcharge` when the observed
/// price moved more than `threshold` since the previous swap.
///
/// The comparison is strict: a move of exactly `threshold` keeps the base
/// tier.
///
/// # Examples
///
/// ```
/// use dynfee_amm::domain::{BasisPoints, Price};
/// use dynfee_amm::fee::VolatilityFeePolicy;
/// use dynfee_amm::traits::FeePolicy;
///
/// let policy = VolatilityFeePolicy::default();
/// let base = BasisPoints::new(30);
/// assert_eq!(policy.compute_fee(Price::new(1_000), Price::new(1_050), base).get(), 30);
/// assert_eq!(policy.compute_fee(Price::new(1_000), Price::new(1_200), base).get(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VolatilityFeePolicy {
    threshold: u128,
    surcharge: BasisPoints,
}

impl VolatilityFeePolicy {
    /// Creates a policy with an explicit threshold and surcharge.
    #[must_use]
    pub const fn new(threshold: u128, surcharge: BasisPoints) -> Self {
        Self {
            threshold,
            surcharge,
        }
    }

    /// Returns the volatility threshold in scaled price units.
    #[must_use]
    pub const fn threshold(&self) -> u128 {
        self.threshold
    }

    /// Returns the surcharge applied above the threshold.
    #[must_use]
    pub const fn surcharge(&self) -> BasisPoints {
        self.surcharge
    }
}

impl Default for VolatilityFeePolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_VOLATILITY_THRESHOLD,
            BasisPoints::new(DEFAULT_SURCHARGE_BPS),
        )
    }
}

impl From<&FeePolicyConfig> for VolatilityFeePolicy {
    fn from(config: &FeePolicyConfig) -> Self {
        Self::new(config.volatility_threshold(), config.surcharge())
    }
}

impl FeePolicy for VolatilityFeePolicy {
    fn compute_fee(&self, last_price: Price, new_price: Price, base_fee: BasisPoints) -> BasisPoints {
        let delta = new_price.abs_diff(&last_price);
        let fee = if delta > self.threshold {
            base_fee.saturating_add(self.surcharge)
        } else {
            base_fee
        };
        tracing::trace!(
            last_price = %last_price,
            new_price = %new_price,
            delta = %delta,
            fee_bps = fee.get(),
            "fee tier selected"
        );
        fee
    }
}

/// Evaluates the default volatility policy (threshold 100, surcharge 10 bp).
///
/// # Examples
///
/// ```
/// use dynfee_amm::domain::{BasisPoints, Price};
/// use dynfee_amm::fee::compute_fee;
///
/// let fee = compute_fee(Price::new(1_000), Price::new(1_200), BasisPoints::new(30));
/// assert_eq!(fee, BasisPoints::new(40));
/// ```
#[must_use]
pub fn compute_fee(last_price: Price, new_price: Price, base_fee: BasisPoints) -> BasisPoints {
    VolatilityFeePolicy::default().compute_fee(last_price, new_price, base_fee)
}
