//! Construction parameters for a dynamic-fee pool.

use super::FeePolicyConfig;
use crate::domain::{BasisPoints, FeeMode, DEFAULT_PRICE_SCALE};
use crate::error::AmmError;

/// Immutable parameters a pool is built from.
///
/// Pools always start empty; reserves arrive through
/// [`add_liquidity`](crate::traits::LiquidityPool::add_liquidity).
///
/// # Validation
///
/// - The fee policy must be valid (see [`FeePolicyConfig::validate`]).
/// - `price_scale` must be non-zero.
/// - A deposit tolerance, when set, must not exceed 100%.
///
/// # Drain Guard
///
/// A swap may take the whole output reserve when the input is large enough
/// that `⌊k / reserve_in'⌋` reaches zero.  That is accepted by default; enable
/// [`with_drain_guard`](Self::with_drain_guard) to reject such swaps with
/// [`AmmError::InsufficientLiquidity`] instead.
///
/// # Examples
///
/// ```
/// use dynfee_amm::config::PoolConfig;
/// use dynfee_amm::domain::{BasisPoints, FeeMode};
///
/// let cfg = PoolConfig::default()
///     .with_fee_mode(FeeMode::Deducted)
///     .with_deposit_tolerance(BasisPoints::new(50));
/// assert!(cfg.validate().is_ok());
/// assert_eq!(cfg.price_scale(), 1_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PoolConfig {
    fee_policy: FeePolicyConfig,
    price_scale: u128,
    fee_mode: FeeMode,
    deposit_tolerance: Option<BasisPoints>,
    drain_guard: bool,
}

impl PoolConfig {
    /// Creates a validated pool configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any parameter is out of range.
    pub fn new(
        fee_policy: FeePolicyConfig,
        price_scale: u128,
        fee_mode: FeeMode,
        deposit_tolerance: Option<BasisPoints>,
    ) -> Result<Self, AmmError> {
        let config = Self {
            fee_policy,
            price_scale,
            fee_mode,
            deposit_tolerance,
            drain_guard: false,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any parameter is out of range.
    pub fn validate(&self) -> Result<(), AmmError> {
        self.fee_policy.validate()?;
        if self.price_scale == 0 {
            return Err(AmmError::InvalidConfiguration("price scale must be non-zero"));
        }
        if let Some(tolerance) = self.deposit_tolerance {
            if !tolerance.is_valid_percent() {
                return Err(AmmError::InvalidConfiguration(
                    "deposit tolerance exceeds 100%",
                ));
            }
        }
        Ok(())
    }

    /// Replaces the fee policy parameters.
    #[must_use]
    pub fn with_fee_policy(mut self, fee_policy: FeePolicyConfig) -> Self {
        self.fee_policy = fee_policy;
        self
    }

    /// Replaces the price scale.
    #[must_use]
    pub fn with_price_scale(mut self, price_scale: u128) -> Self {
        self.price_scale = price_scale;
        self
    }

    /// Replaces the fee mode.
    #[must_use]
    pub fn with_fee_mode(mut self, fee_mode: FeeMode) -> Self {
        self.fee_mode = fee_mode;
        self
    }

    /// Enables the deposit ratio check with the given tolerance.
    #[must_use]
    pub fn with_deposit_tolerance(mut self, tolerance: BasisPoints) -> Self {
        self.deposit_tolerance = Some(tolerance);
        self
    }

    /// Enables or disables rejection of swaps that empty the output reserve.
    #[must_use]
    pub fn with_drain_guard(mut self, enabled: bool) -> Self {
        self.drain_guard = enabled;
        self
    }

    /// Returns the fee policy parameters.
    #[must_use]
    pub const fn fee_policy(&self) -> &FeePolicyConfig {
        &self.fee_policy
    }

    /// Returns the price scale.
    #[must_use]
    pub const fn price_scale(&self) -> u128 {
        self.price_scale
    }

    /// Returns the fee mode.
    #[must_use]
    pub const fn fee_mode(&self) -> FeeMode {
        self.fee_mode
    }

    /// Returns the deposit ratio tolerance, if the check is enabled.
    #[must_use]
    pub const fn deposit_tolerance(&self) -> Option<BasisPoints> {
        self.deposit_tolerance
    }

    /// Returns `true` if swaps that empty the output reserve are rejected.
    #[must_use]
    pub const fn drain_guard(&self) -> bool {
        self.drain_guard
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            fee_policy: FeePolicyConfig::default(),
            price_scale: DEFAULT_PRICE_SCALE,
            fee_mode: FeeMode::Informational,
            deposit_tolerance: None,
            drain_guard: false,
        }
    }
}
