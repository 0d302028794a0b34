//! Parameters of the volatility fee policy.

use crate::domain::BasisPoints;
use crate::error::AmmError;

/// Default base fee (0.30%).
pub const DEFAULT_BASE_FEE_BPS: u32 = 30;

/// Default price movement, in scaled price units, above which the surcharge applies.
pub const DEFAULT_VOLATILITY_THRESHOLD: u128 = 100;

/// Default surcharge added to the base fee under high volatility.
pub const DEFAULT_SURCHARGE_BPS: u32 = 10;

/// Configuration for the two-tier volatility fee.
///
/// A swap whose observed price moves more than `volatility_threshold`
/// away from the previous swap's price sets the fee to
/// `base_fee + surcharge`; otherwise the fee is `base_fee`.
///
/// # Validation
///
/// - `base_fee + surcharge` must not exceed 100% (10 000 bp).
///
/// # Examples
///
/// ```
/// use dynfee_amm::config::FeePolicyConfig;
///
/// let cfg = FeePolicyConfig::default();
/// assert_eq!(cfg.base_fee().get(), 30);
/// assert_eq!(cfg.elevated_fee().get(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FeePolicyConfig {
    base_fee: BasisPoints,
    volatility_threshold: u128,
    surcharge: BasisPoints,
}

impl FeePolicyConfig {
    /// Creates a validated fee policy configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the elevated tier
    /// exceeds 100%.
    pub fn new(
        base_fee: BasisPoints,
        volatility_threshold: u128,
        surcharge: BasisPoints,
    ) -> Result<Self, AmmError> {
        let config = Self {
            base_fee,
            volatility_threshold,
            surcharge,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `base_fee + surcharge`
    /// overflows or exceeds 10 000 bp.
    pub fn validate(&self) -> Result<(), AmmError> {
        let elevated = self
            .base_fee
            .checked_add(self.surcharge)
            .ok_or(AmmError::InvalidConfiguration("elevated fee overflows"))?;
        if !elevated.is_valid_percent() {
            return Err(AmmError::InvalidConfiguration(
                "base fee plus surcharge exceeds 100%",
            ));
        }
        Ok(())
    }

    /// Returns the base fee.
    #[must_use]
    pub const fn base_fee(&self) -> BasisPoints {
        self.base_fee
    }

    /// Returns the volatility threshold in scaled price units.
    #[must_use]
    pub const fn volatility_threshold(&self) -> u128 {
        self.volatility_threshold
    }

    /// Returns the high-volatility surcharge.
    #[must_use]
    pub const fn surcharge(&self) -> BasisPoints {
        self.surcharge
    }

    /// Returns `base_fee + surcharge`.
    #[must_use]
    pub const fn elevated_fee(&self) -> BasisPoints {
        self.base_fee.saturating_add(self.surcharge)
    }
}

impl Default for FeePolicyConfig {
    fn default() -> Self {
        Self {
            base_fee: BasisPoints::new(DEFAULT_BASE_FEE_BPS),
            volatility_threshold: DEFAULT_VOLATILITY_THRESHOLD,
            surcharge: BasisPoints::new(DEFAULT_SURCHARGE_BPS),
        }
    }
}
