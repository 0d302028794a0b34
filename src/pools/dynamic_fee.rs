//! Constant-product pool with a volatility-driven fee tier.
//!
//! The swap invariant is `x × y = k`.  After every swap the pool records
//! the observed price `amount_in × scale / amount_out` and asks its
//! [`FeePolicy`] for the next fee tier, comparing against the price the
//! *previous* swap observed.
//!
//! # Fee Handling
//!
//! Under [`FeeMode::Informational`](crate::domain::FeeMode::Informational)
//! the tier is reported but never charged, so the full input prices the
//! trade.  Under [`FeeMode::Deducted`](crate::domain::FeeMode::Deducted) the
//! tier in effect *before* the swap is taken from the input and left in
//! the pool, so `k_after ≥ k_before`.

use crate::config::PoolConfig;
use crate::domain::{Amount, Balances, Price, SwapDirection, SwapResult};
use crate::error::AmmError;
use crate::fee::VolatilityFeePolicy;
use crate::traits::{FeePolicy, FromConfig, LiquidityPool, SwapPool};

use super::{liquidity, PoolState, SwapEngine};

/// A two-reserve constant-product pool whose fee adapts to volatility.
///
/// Created empty from a [`PoolConfig`] via [`FromConfig`]; reserves arrive
/// through [`LiquidityPool::add_liquidity`].  The fee policy defaults to
/// [`VolatilityFeePolicy`] and can be replaced with
/// [`with_policy`](Self::with_policy).
///
/// `DynamicFeePool` takes `&mut self` for every mutation and performs no
/// locking; wrap it in a [`SharedPool`](super::SharedPool) to share it
/// across threads.
///
/// # Example
///
/// ```rust
/// use dynfee_amm::config::PoolConfig;
/// use dynfee_amm::domain::{Amount, BasisPoints};
/// use dynfee_amm::pools::DynamicFeePool;
/// use dynfee_amm::traits::{FromConfig, LiquidityPool, SwapPool};
///
/// let mut pool = DynamicFeePool::from_config(&PoolConfig::default()).expect("valid config");
/// pool.add_liquidity(Amount::new(1_000), Amount::new(2_000)).expect("deposit");
///
/// let out = pool.swap_x_for_y(Amount::new(500)).expect("swap");
/// assert_eq!(out, Amount::new(667));
/// assert_eq!(pool.balances().current_fee, BasisPoints::new(40));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicFeePool<P = VolatilityFeePolicy> {
    config: PoolConfig,
    policy: P,
    state: PoolState,
}

impl<P: FeePolicy> DynamicFeePool<P> {
    /// Creates an empty pool that prices fees with a custom `policy`.
    ///
    /// The threshold and surcharge in `config` are ignored; the base fee,
    /// price scale, fee mode and deposit tolerance still apply.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    pub fn with_policy(config: &PoolConfig, policy: P) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            config: *config,
            policy,
            state: PoolState::new(config.fee_policy().base_fee()),
        })
    }

    /// Returns a copy of the committed state.
    #[must_use]
    pub const fn state(&self) -> PoolState {
        self.state
    }

    /// Returns the configuration the pool was built from.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Returns the fee policy.
    #[must_use]
    pub const fn policy(&self) -> &P {
        &self.policy
    }

    fn engine(&self) -> SwapEngine<'_, P> {
        SwapEngine::new(&self.policy, &self.config)
    }
}

impl FromConfig<PoolConfig> for DynamicFeePool {
    /// Creates an empty pool with a [`VolatilityFeePolicy`] built from
    /// `config.fee_policy()`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        Self::with_policy(config, VolatilityFeePolicy::from(config.fee_policy()))
    }
}

impl<P: FeePolicy> SwapPool for DynamicFeePool<P> {
    fn swap(&mut self, direction: SwapDirection, amount_in: Amount) -> Result<SwapResult, AmmError> {
        let engine = SwapEngine::new(&self.policy, &self.config);
        match engine.execute(&mut self.state, direction, amount_in) {
            Ok(result) => {
                tracing::debug!(
                    %direction,
                    amount_in = %amount_in,
                    amount_out = %result.amount_out(),
                    price = %result.price(),
                    fee_bps = result.fee().get(),
                    reserve_x = %self.state.reserve_x,
                    reserve_y = %self.state.reserve_y,
                    "swap committed"
                );
                Ok(result)
            }
            Err(err) => {
                tracing::debug!(%direction, amount_in = %amount_in, error = %err, "swap rejected");
                Err(err)
            }
        }
    }

    fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<SwapResult, AmmError> {
        self.engine()
            .quote(&self.state, direction, amount_in)
            .map(|(result, _)| result)
    }

    fn balances(&self) -> Balances {
        self.state.balances()
    }

    /// Returns `⌊reserve_y × scale / reserve_x⌋`.
    fn spot_price(&self) -> Result<Price, AmmError> {
        if self.state.is_empty() {
            return Err(AmmError::EmptyPool);
        }
        Price::from_ratio(
            self.state.reserve_y,
            self.state.reserve_x,
            self.config.price_scale(),
        )
    }
}

impl<P: FeePolicy> LiquidityPool for DynamicFeePool<P> {
    fn add_liquidity(&mut self, amount_x: Amount, amount_y: Amount) -> Result<Balances, AmmError> {
        match liquidity::deposit(
            &self.state,
            amount_x,
            amount_y,
            self.config.deposit_tolerance(),
        ) {
            Ok(next) => {
                self.state = next;
                tracing::debug!(
                    amount_x = %amount_x,
                    amount_y = %amount_y,
                    reserve_x = %next.reserve_x,
                    reserve_y = %next.reserve_y,
                    "liquidity added"
                );
                Ok(next.balances())
            }
            Err(err) => {
                tracing::debug!(
                    amount_x = %amount_x,
                    amount_y = %amount_y,
                    error = %err,
                    "deposit rejected"
                );
                Err(err)
            }
        }
    }
}
