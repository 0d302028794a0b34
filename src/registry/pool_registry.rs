//! Thread-safe pool registry.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::PoolConfig;
use crate::domain::{Amount, SwapResult, TokenAddress, TokenPair};
use crate::error::AmmError;
use crate::pools::SharedPool;
use crate::traits::FromConfig;

/// Map from canonical [`TokenPair`] to a shared pool.
///
/// The registry lock is held only while the map itself is read or
/// modified; trading goes through the returned [`SharedPool`] handle and
/// its own lock.  A removed pool stays usable by callers that still hold
/// its `Arc`.
#[derive(Debug)]
pub struct PoolRegistry {
    default_config: PoolConfig,
    pools: RwLock<HashMap<TokenPair, Arc<SharedPool>>>,
}

impl PoolRegistry {
    /// Creates an empty registry whose pools default to `default_config`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    pub fn new(default_config: PoolConfig) -> Result<Self, AmmError> {
        default_config.validate()?;
        Ok(Self {
            default_config,
            pools: RwLock::new(HashMap::new()),
        })
    }

    /// Returns the configuration used by [`create`](Self::create) and
    /// [`get_or_create`](Self::get_or_create).
    #[must_use]
    pub const fn default_config(&self) -> &PoolConfig {
        &self.default_config
    }

    /// Registers an empty pool for `pair` built from the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolAlreadyExists`] if `pair` is already registered.
    pub fn create(&self, pair: TokenPair) -> Result<Arc<SharedPool>, AmmError> {
        self.create_with(pair, &self.default_config)
    }

    /// Registers an empty pool for `pair` built from `config`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolAlreadyExists`] if `pair` is already registered.
    /// - Any error from [`PoolConfig::validate`].
    pub fn create_with(
        &self,
        pair: TokenPair,
        config: &PoolConfig,
    ) -> Result<Arc<SharedPool>, AmmError> {
        let pool = Arc::new(SharedPool::from_config(config)?);
        match self.pools.write().entry(pair) {
            Entry::Occupied(_) => {
                tracing::debug!(%pair, "pool already registered");
                Err(AmmError::PoolAlreadyExists)
            }
            Entry::Vacant(slot) => {
                slot.insert(Arc::clone(&pool));
                tracing::info!(%pair, fee_mode = ?config.fee_mode(), "pool created");
                Ok(pool)
            }
        }
    }

    /// Returns the pool registered for `pair`, if any.
    #[must_use]
    pub fn get(&self, pair: &TokenPair) -> Option<Arc<SharedPool>> {
        self.pools.read().get(pair).cloned()
    }

    /// Returns the pool for `pair`, creating it from the default
    /// configuration if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Propagates construction errors from [`SharedPool::from_config`].
    pub fn get_or_create(&self, pair: TokenPair) -> Result<Arc<SharedPool>, AmmError> {
        if let Some(pool) = self.get(&pair) {
            return Ok(pool);
        }
        let mut pools = self.pools.write();
        match pools.entry(pair) {
            Entry::Occupied(slot) => Ok(Arc::clone(slot.get())),
            Entry::Vacant(slot) => {
                let pool = Arc::new(SharedPool::from_config(&self.default_config)?);
                slot.insert(Arc::clone(&pool));
                tracing::info!(%pair, "pool created");
                Ok(pool)
            }
        }
    }

    /// Unregisters the pool for `pair` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if `pair` is not registered.
    pub fn remove(&self, pair: &TokenPair) -> Result<Arc<SharedPool>, AmmError> {
        let removed = self.pools.write().remove(pair);
        match removed {
            Some(pool) => {
                tracing::info!(%pair, "pool removed");
                Ok(pool)
            }
            None => Err(AmmError::PoolNotFound),
        }
    }

    /// Sells `amount_in` of `token_in` in the pool registered for `pair`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if `pair` is not registered.
    /// - [`AmmError::InvalidToken`] if `token_in` is not part of `pair`.
    /// - Any error from [`SharedPool::swap`].
    pub fn swap(
        &self,
        pair: &TokenPair,
        token_in: &TokenAddress,
        amount_in: Amount,
    ) -> Result<SwapResult, AmmError> {
        let direction = pair.direction_for(token_in)?;
        let pool = self.get(pair).ok_or(AmmError::PoolNotFound)?;
        pool.swap(direction, amount_in)
    }

    /// Returns the number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.read().len()
    }

    /// Returns `true` if no pool is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.read().is_empty()
    }

    /// Returns every registered pair in ascending order.
    #[must_use]
    pub fn pairs(&self) -> Vec<TokenPair> {
        let mut pairs: Vec<TokenPair> = self.pools.read().keys().copied().collect();
        pairs.sort_unstable();
        pairs
    }
}

impl Default for PoolRegistry {
    fn default() -> Self {
        Self {
            default_config: PoolConfig::default(),
            pools: RwLock::new(HashMap::new()),
        }
    }
}
