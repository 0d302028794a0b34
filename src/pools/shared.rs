//! Thread-safe pool handle.

use parking_lot::RwLock;

use crate::config::PoolConfig;
use crate::domain::{Amount, Balances, Price, SwapDirection, SwapResult};
use crate::error::AmmError;
use crate::fee::VolatilityFeePolicy;
use crate::traits::{FeePolicy, FromConfig, LiquidityPool, SwapPool};

use super::{DynamicFeePool, PoolState};

/// A [`DynamicFeePool`] behind a reader-writer lock.
///
/// Swaps and deposits hold the write lock for the whole compute-and-commit
/// window, so concurrent mutations are linearizable.  Reads take the read
/// lock and only ever see committed snapshots.  Guards are scoped to each
/// call.
///
/// Share it between threads with `Arc<SharedPool>`.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use dynfee_amm::config::PoolConfig;
/// use dynfee_amm::domain::Amount;
/// use dynfee_amm::pools::SharedPool;
/// use dynfee_amm::traits::FromConfig;
///
/// let pool = Arc::new(SharedPool::from_config(&PoolConfig::default()).expect("valid config"));
/// pool.add_liquidity(Amount::new(1_000_000), Amount::new(1_000_000)).expect("deposit");
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let pool = Arc::clone(&pool);
///         std::thread::spawn(move || pool.swap_x_for_y(Amount::new(1_000)))
///     })
///     .collect();
/// for h in handles {
///     assert!(h.join().expect("thread").is_ok());
/// }
/// assert_eq!(pool.balances().reserve_x, Amount::new(1_004_000));
/// ```
#[derive(Debug)]
pub struct SharedPool<P = VolatilityFeePolicy> {
    inner: RwLock<DynamicFeePool<P>>,
}

impl<P: FeePolicy> SharedPool<P> {
    /// Wraps an existing pool.
    #[must_use]
    pub fn new(pool: DynamicFeePool<P>) -> Self {
        Self {
            inner: RwLock::new(pool),
        }
    }

    /// Executes a swap under the write lock.
    ///
    /// # Errors
    ///
    /// Same as [`SwapPool::swap`].
    pub fn swap(&self, direction: SwapDirection, amount_in: Amount) -> Result<SwapResult, AmmError> {
        self.inner.write().swap(direction, amount_in)
    }

    /// Sells `amount_in` of token X and returns the amount of Y released.
    ///
    /// # Errors
    ///
    /// Same as [`SwapPool::swap_x_for_y`].
    pub fn swap_x_for_y(&self, amount_in: Amount) -> Result<Amount, AmmError> {
        self.inner.write().swap_x_for_y(amount_in)
    }

    /// Sells `amount_in` of token Y and returns the amount of X released.
    ///
    /// # Errors
    ///
    /// Same as [`SwapPool::swap_y_for_x`].
    pub fn swap_y_for_x(&self, amount_in: Amount) -> Result<Amount, AmmError> {
        self.inner.write().swap_y_for_x(amount_in)
    }

    /// Deposits under the write lock.
    ///
    /// # Errors
    ///
    /// Same as [`LiquidityPool::add_liquidity`].
    pub fn add_liquidity(&self, amount_x: Amount, amount_y: Amount) -> Result<Balances, AmmError> {
        self.inner.write().add_liquidity(amount_x, amount_y)
    }

    /// Quotes a swap against the committed state under the read lock.
    ///
    /// The quote is only a snapshot; another thread may commit a swap
    /// before the caller acts on it.
    ///
    /// # Errors
    ///
    /// Same as [`SwapPool::quote`].
    pub fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<SwapResult, AmmError> {
        self.inner.read().quote(direction, amount_in)
    }

    /// Returns the committed reserves and fee tier.
    #[must_use]
    pub fn balances(&self) -> Balances {
        self.inner.read().balances()
    }

    /// Returns a copy of the committed state.
    #[must_use]
    pub fn state(&self) -> PoolState {
        self.inner.read().state()
    }

    /// Returns the marginal price of X in units of Y.
    ///
    /// # Errors
    ///
    /// Same as [`SwapPool::spot_price`].
    pub fn spot_price(&self) -> Result<Price, AmmError> {
        self.inner.read().spot_price()
    }

    /// Returns the configuration the pool was built from.
    #[must_use]
    pub fn config(&self) -> PoolConfig {
        *self.inner.read().config()
    }

    /// Consumes the handle and returns the pool.
    pub fn into_inner(self) -> DynamicFeePool<P> {
        self.inner.into_inner()
    }
}

impl FromConfig<PoolConfig> for SharedPool {
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        DynamicFeePool::from_config(config).map(Self::new)
    }
}

impl<P: FeePolicy> From<DynamicFeePool<P>> for SharedPool<P> {
    fn from(pool: DynamicFeePool<P>) -> Self {
        Self::new(pool)
    }
}
